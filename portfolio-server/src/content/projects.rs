//! Project folder listing backing `GET /api/projects`

use shared_types::{Project, ProjectFile, ProjectsResponse, ABOUT_ME_NAME};
use std::path::Path;
use tokio::fs;

use super::{public_url, read_sorted_dir, ABOUT_ME_DIR, PROJECTS_DIR};

/// List the regular files of `dir` as public URLs.
///
/// Any I/O error yields an empty list.
pub async fn read_folder_files(public_dir: &Path, dir: &Path) -> Vec<ProjectFile> {
    match read_sorted_dir(dir).await {
        Ok(entries) => entries
            .into_iter()
            .filter(|entry| entry.is_file())
            .map(|entry| ProjectFile {
                url: public_url(public_dir, &entry.path),
                name: entry.name,
            })
            .collect(),
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "Folder unreadable, listing no files");
            Vec::new()
        }
    }
}

/// Scan `about-me/` and every subdirectory of `projects/`.
///
/// Both base folders are created when missing. Empty project folders are
/// hidden; a failing `projects/` read yields no projects at all.
pub async fn scan_projects(public_dir: &Path) -> ProjectsResponse {
    let about_me_dir = public_dir.join(ABOUT_ME_DIR);
    let projects_root = public_dir.join(PROJECTS_DIR);

    for dir in [&about_me_dir, &projects_root] {
        if let Err(e) = fs::create_dir_all(dir).await {
            tracing::debug!(path = %dir.display(), error = %e, "Could not create content folder");
        }
    }

    let projects = match read_sorted_dir(&projects_root).await {
        Ok(entries) => {
            let mut projects = Vec::new();
            for entry in entries.into_iter().filter(|entry| entry.is_dir()) {
                let files = read_folder_files(public_dir, &entry.path).await;
                projects.push(Project::new(entry.name, files));
            }
            projects
        }
        Err(e) => {
            tracing::warn!(path = %projects_root.display(), error = %e, "Failed to scan projects");
            Vec::new()
        }
    };

    let projects: Vec<Project> = projects
        .into_iter()
        .filter(|project| !project.is_empty())
        .collect();

    let about_me = Project::new(
        ABOUT_ME_NAME,
        read_folder_files(public_dir, &about_me_dir).await,
    );

    tracing::debug!(
        projects = projects.len(),
        about_me_files = about_me.files.len(),
        "Scanned project folders"
    );

    ProjectsResponse { about_me, projects }
}

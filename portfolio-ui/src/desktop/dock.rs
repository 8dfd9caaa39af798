//! Dock magnification: per-icon size/lift targets and the spring that
//! smooths icons toward them.

use std::f64::consts::PI;

use super::state::WindowKind;

pub const ICON_BASE_SIZE: f64 = 48.0;
pub const ICON_MAGNIFIED_SIZE: f64 = 80.0;
pub const ICON_LIFT_Y: f64 = -24.0;
/// Pointer distance from an icon center at which magnification fades out.
pub const MAGNIFY_THRESHOLD_PX: f64 = 72.0;

pub const DOCK_PADDING_PX: f64 = 12.0;
pub const DOCK_GAP_PX: f64 = 12.0;
pub const DIVIDER_WIDTH_PX: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockTarget {
    pub size: f64,
    pub lift: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnification {
    pub base: f64,
    pub magnified: f64,
    pub lift: f64,
    pub threshold: f64,
}

impl Default for Magnification {
    fn default() -> Self {
        Self {
            base: ICON_BASE_SIZE,
            magnified: ICON_MAGNIFIED_SIZE,
            lift: ICON_LIFT_Y,
            threshold: MAGNIFY_THRESHOLD_PX,
        }
    }
}

impl Magnification {
    pub fn baseline(&self) -> DockTarget {
        DockTarget {
            size: self.base,
            lift: 0.0,
        }
    }

    /// Target for an icon whose center is `distance` px from the pointer.
    ///
    /// `None` means the pointer is outside the dock. Inside the threshold the
    /// target follows a raised-cosine falloff, so it is continuous and never
    /// grows with distance.
    pub fn target(&self, distance: Option<f64>) -> DockTarget {
        let Some(distance) = distance.filter(|d| d.is_finite()) else {
            return self.baseline();
        };
        let d = distance.abs();
        if d >= self.threshold || self.threshold <= 0.0 {
            return self.baseline();
        }

        let factor = 0.5 * (1.0 + (PI * d / self.threshold).cos());
        DockTarget {
            size: self.base + (self.magnified - self.base) * factor,
            lift: self.lift * factor,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

const SPRING_MAX_SUBSTEP_MS: f64 = 4.0;
/// Longest frame a single step integrates; a backgrounded tab resumes here.
pub const SPRING_MAX_FRAME_MS: f64 = 64.0;
const SPRING_REST_DELTA: f64 = 0.01;
const SPRING_REST_SPEED: f64 = 0.01;

impl Spring {
    pub fn new(mass: f64, stiffness: f64, damping: f64, value: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// The dock's spring: light, stiff and slightly overdamped.
    pub fn dock(value: f64) -> Self {
        Self::new(0.1, 150.0, 12.0, value)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }

    /// Advance by `dt_ms` (capped at [`SPRING_MAX_FRAME_MS`]), integrating in
    /// small substeps so long frames stay stable.
    pub fn step(&mut self, dt_ms: f64) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let mut remaining = dt_ms.clamp(0.0, SPRING_MAX_FRAME_MS);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_MAX_SUBSTEP_MS) / 1000.0;
            let force =
                -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.value += self.velocity * h;
            remaining -= SPRING_MAX_SUBSTEP_MS;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DockIcon {
    Image(&'static str),
    Spotify,
    Divider,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DockApp {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: DockIcon,
    /// Static indicator dot for apps that are "running" but not interactive.
    pub dot: bool,
}

impl DockApp {
    const fn image(id: &'static str, label: &'static str, url: &'static str) -> Self {
        Self {
            id,
            label,
            icon: DockIcon::Image(url),
            dot: false,
        }
    }

    const fn with_dot(mut self) -> Self {
        self.dot = true;
        self
    }

    pub fn is_divider(&self) -> bool {
        self.icon == DockIcon::Divider
    }

    /// Window toggled by clicking this icon.
    pub fn launches(&self) -> Option<WindowKind> {
        match self.id {
            "contacts" => Some(WindowKind::Contact),
            "photos" => Some(WindowKind::Gallery),
            "messages" => Some(WindowKind::Messages),
            _ => None,
        }
    }
}

pub const DOCK_APPS: &[DockApp] = &[
    DockApp::image("finder", "Finder", "https://framerusercontent.com/images/wtQkw1jK0MlEDOrW0Q1kE5PBqc.png"),
    DockApp::image("launchpad", "Launchpad", "https://framerusercontent.com/images/KCaz69s4OvhKMUI25E1RBeuNIyA.png").with_dot(),
    DockApp::image("safari", "Safari", "https://framerusercontent.com/images/qQISGOSSnz748TdrZn91l44R5u0.png").with_dot(),
    DockApp::image("messages", "Messages", "https://framerusercontent.com/images/fm90fwzWoBMCvK5C0MOyKdo94.png"),
    DockApp::image("mail", "Mail", "https://framerusercontent.com/images/CwKoPLck9kD8CifRkrpug3socM.png"),
    DockApp::image("maps", "Maps", "https://framerusercontent.com/images/YtLyrfz2kFN2QhkzBWG6TrATw.png"),
    DockApp::image("photos", "Photos", "https://framerusercontent.com/images/ogWIDEJmWxA8SVRZpEe7gk35FcM.png"),
    DockApp::image("facetime", "FaceTime", "https://framerusercontent.com/images/xxKf6tPzYecSWOavDJjUB0MtXw.png"),
    DockApp::image("calendar", "Calendar", "https://framerusercontent.com/images/VeljykK560qBRDkQkYyhx8ChI.png"),
    DockApp::image("contacts", "Contacts", "https://framerusercontent.com/images/gi6dMq8dbjba0LyjZSuySu4X6zg.png"),
    DockApp::image("reminders", "Reminders", "https://framerusercontent.com/images/NMuItXJj2OKiPiAC2EdivhRPYY.png"),
    DockApp::image("notes", "Notes", "https://framerusercontent.com/images/Z0d1XNe7wVINUiHydSL6noKho.png"),
    DockApp::image("tv", "Apple TV", "https://framerusercontent.com/images/1pORyCnfgAxpXWyCa1l7s8IJeK0.png"),
    DockApp::image("music", "Music", "https://slelguoygbfzlpylpxfs.supabase.co/storage/v1/object/public/test-clones/7c0c911a-1ae7-40dd-8466-7ca3af5221e9-inikasdesktop-framer-website/assets/icons/pjjxP6KY1Ttnqhuqt9oF3QBfmE-15.png"),
    DockApp::image("podcasts", "Podcasts", "https://framerusercontent.com/images/y6Unx5f6vZ4SwFJ4bnDpnejmKM.png"),
    DockApp::image("appstore", "App Store", "https://framerusercontent.com/images/mjYHu1WKSujuvzAuskfVJSx2w.png"),
    DockApp::image("system", "System Preferences", "https://framerusercontent.com/images/VbY44vBZlQp4srNQK6ohxpco.png"),
    DockApp {
        id: "spotify",
        label: "Spotify",
        icon: DockIcon::Spotify,
        dot: false,
    },
    DockApp {
        id: "divider",
        label: "divider",
        icon: DockIcon::Divider,
        dot: false,
    },
    DockApp::image("folder", "Folder", "https://framerusercontent.com/images/lwNP7fGxNGl6VSwvqD3AorA1h0.png"),
    DockApp::image("trash", "Trash", "https://framerusercontent.com/images/XYN0Nl9HILu4c0bzhEPmjha0Cg.png"),
];

/// Size and lift springs of one slot.
pub type SlotSprings = (Spring, Spring);

/// Retarget every slot for `pointer` (relative to the dock's left edge) and
/// advance the ones still moving. Returns `false` once all of them rest.
pub fn step_slots(
    slots: &mut [SlotSprings],
    centers: &[Option<f64>],
    pointer: Option<f64>,
    magnification: Magnification,
    dt_ms: f64,
) -> bool {
    let mut moving = false;
    for ((size, lift), center) in slots.iter_mut().zip(centers) {
        let distance = center.zip(pointer).map(|(center, x)| x - center);
        let target = magnification.target(distance);
        size.set_target(target.size);
        lift.set_target(target.lift);
        if !(size.is_settled() && lift.is_settled()) {
            size.step(dt_ms);
            lift.step(dt_ms);
            moving = true;
        }
    }
    moving
}

/// Horizontal center of each slot relative to the dock's left edge.
///
/// Slots keep their base width while icons magnify (the icon overflows its
/// slot), so centers depend only on the static layout. Dividers have no
/// center.
pub fn slot_centers(apps: &[DockApp], base: f64) -> Vec<Option<f64>> {
    let mut cursor = DOCK_PADDING_PX;
    let mut centers = Vec::with_capacity(apps.len());
    for (i, app) in apps.iter().enumerate() {
        if i > 0 {
            cursor += DOCK_GAP_PX;
        }
        if app.is_divider() {
            centers.push(None);
            cursor += DIVIDER_WIDTH_PX;
        } else {
            centers.push(Some(cursor + base / 2.0));
            cursor += base;
        }
    }
    centers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_extremes() {
        let m = Magnification::default();
        assert_eq!(m.target(Some(0.0)), DockTarget { size: 80.0, lift: -24.0 });
        assert_eq!(m.target(Some(72.0)), m.baseline());
        assert_eq!(m.target(Some(-500.0)), m.baseline());
        assert_eq!(m.target(None), m.baseline());
        assert_eq!(m.target(Some(f64::INFINITY)), m.baseline());
    }

    #[test]
    fn target_is_symmetric() {
        let m = Magnification::default();
        assert_eq!(m.target(Some(-20.0)), m.target(Some(20.0)));
    }

    #[test]
    fn spring_settles_on_target_without_overshoot() {
        let mut spring = Spring::dock(ICON_BASE_SIZE);
        spring.set_target(ICON_MAGNIFIED_SIZE);

        let mut max_seen = spring.value();
        for _ in 0..120 {
            spring.step(16.0);
            max_seen = max_seen.max(spring.value());
        }

        assert!(spring.is_settled());
        assert_eq!(spring.value(), ICON_MAGNIFIED_SIZE);
        assert!(max_seen <= ICON_MAGNIFIED_SIZE + 0.5);
    }

    #[test]
    fn spring_survives_long_frames() {
        let mut spring = Spring::dock(0.0);
        spring.set_target(-24.0);
        for _ in 0..20 {
            spring.step(250.0);
            assert!(spring.value().is_finite());
            assert!(spring.value() > -30.0 && spring.value() < 5.0);
        }
        assert!(spring.is_settled());
    }

    #[test]
    fn huge_frame_gap_integrates_one_capped_frame() {
        let mut resumed = Spring::dock(ICON_BASE_SIZE);
        let mut capped = resumed;
        resumed.set_target(ICON_MAGNIFIED_SIZE);
        capped.set_target(ICON_MAGNIFIED_SIZE);

        resumed.step(3.6e6);
        capped.step(SPRING_MAX_FRAME_MS);
        assert_eq!(resumed, capped);
        assert!(!resumed.is_settled());
    }

    #[test]
    fn slots_come_to_rest_once_pointer_leaves() {
        let centers = slot_centers(DOCK_APPS, ICON_BASE_SIZE);
        let mut slots: Vec<SlotSprings> = DOCK_APPS
            .iter()
            .map(|_| (Spring::dock(ICON_BASE_SIZE), Spring::dock(0.0)))
            .collect();
        let m = Magnification::default();
        assert!(!step_slots(&mut slots, &centers, None, m, 16.0));

        let pointer = centers.iter().flatten().next().copied();
        assert!(step_slots(&mut slots, &centers, pointer, m, 16.0));

        let mut frames = 0;
        while step_slots(&mut slots, &centers, None, m, 16.0) {
            frames += 1;
            assert!(frames < 500, "dock never settled");
        }
        assert!(slots.iter().all(|(size, lift)| {
            size.value() == ICON_BASE_SIZE && lift.value() == 0.0
        }));
    }

    #[test]
    fn settled_spring_stays_put() {
        let mut spring = Spring::dock(48.0);
        spring.step(16.0);
        assert_eq!(spring.value(), 48.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn slot_centers_skip_divider() {
        let apps = [
            DockApp::image("a", "A", "a.png"),
            DockApp {
                id: "divider",
                label: "divider",
                icon: DockIcon::Divider,
                dot: false,
            },
            DockApp::image("b", "B", "b.png"),
        ];
        assert_eq!(
            slot_centers(&apps, 48.0),
            vec![Some(36.0), None, Some(12.0 + 48.0 + 12.0 + 1.0 + 12.0 + 24.0)]
        );
    }

    #[test]
    fn only_three_apps_launch_windows() {
        let launchers: Vec<_> = DOCK_APPS.iter().filter_map(DockApp::launches).collect();
        assert_eq!(
            launchers,
            vec![WindowKind::Messages, WindowKind::Gallery, WindowKind::Contact]
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Size never grows as the pointer moves away from the icon.
        #[test]
        fn size_monotonically_decreasing(d1 in -200.0f64..200.0, d2 in -200.0f64..200.0) {
            let m = Magnification::default();
            let (near, far) = if d1.abs() <= d2.abs() { (d1, d2) } else { (d2, d1) };
            let near_size = m.target(Some(near)).size;
            let far_size = m.target(Some(far)).size;
            prop_assert!(
                near_size + 1e-9 >= far_size,
                "size({}) = {} < size({}) = {}",
                near, near_size, far, far_size
            );
        }

        /// Size stays between the baseline floor and the magnified ceiling.
        #[test]
        fn size_bounded(d in -500.0f64..500.0) {
            let m = Magnification::default();
            let target = m.target(Some(d));
            prop_assert!(target.size >= m.base - 1e-9);
            prop_assert!(target.size <= m.magnified + 1e-9);
            prop_assert!(target.lift <= 0.0 + 1e-9 && target.lift >= m.lift - 1e-9);
            if d.abs() >= m.threshold {
                prop_assert_eq!(target, m.baseline());
            }
        }
    }
}

pub const DESKTOP_STYLES: &str = r#"
:root {
    --system-red: #ff5f57;
    --system-yellow: #febc2e;
    --system-green: #28c840;
    --folder-blue: #4fa3e3;
    --text-primary: #1d1d1f;
    --menu-bar-bg: rgba(246, 246, 246, 0.72);
    --post-it-yellow: #fff27a;
    --border-color: rgba(0, 0, 0, 0.1);
}

html, body {
    margin: 0;
    padding: 0;
    width: 100%;
    height: 100%;
    overflow: hidden;
    font-family: -apple-system, BlinkMacSystemFont, "Helvetica Neue", sans-serif;
}

.desktop {
    position: relative;
    width: 100vw;
    height: 100vh;
    overflow: hidden;
    background: #f5f5f4;
}

.desktop-grid {
    position: absolute;
    inset: 0;
    background-image:
        linear-gradient(to right, rgba(0, 0, 0, 0.08) 1px, transparent 1px),
        linear-gradient(to bottom, rgba(0, 0, 0, 0.08) 1px, transparent 1px);
    background-size: 32px 32px;
    opacity: 0.2;
    pointer-events: none;
}

.background-media {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
    pointer-events: none;
}

.welcome-banner {
    position: absolute;
    inset: 0;
    z-index: 10;
    display: flex;
    align-items: center;
    justify-content: center;
    pointer-events: none;
    font-size: clamp(2rem, 6vw, 5rem);
    font-weight: 900;
    letter-spacing: -0.03em;
    color: var(--text-primary);
}

.menu-bar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    height: 22px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0 16px;
    background: var(--menu-bar-bg);
    backdrop-filter: blur(20px);
    box-shadow: 0 0 0 1px rgba(0, 0, 0, 0.035), 0 1px 1px rgba(0, 0, 0, 0.02);
    font-size: 13px;
    color: #000;
}

.menu-bar a, .menu-bar button {
    color: inherit;
    text-decoration: none;
    background: none;
    border: none;
    padding: 0;
    font: inherit;
    cursor: pointer;
}

.menu-bar a:hover, .menu-bar button:hover { text-decoration: underline; }
.menu-bar .group { display: flex; align-items: center; gap: 20px; }
.menu-bar .status { display: flex; align-items: center; gap: 12px; }

.desktop-item {
    position: absolute;
    z-index: 30;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 6px;
    width: 76px;
    text-align: center;
    cursor: pointer;
    background: none;
    border: none;
    padding: 0;
    text-decoration: none;
    user-select: none;
}

.desktop-item .glyph {
    width: 64px;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 40px;
    transition: transform 0.2s ease-in-out;
    filter: drop-shadow(0 2px 4px rgba(0, 0, 0, 0.1));
}

.desktop-item:hover .glyph { transform: scale(1.05); }
.desktop-item img { width: 64px; height: 64px; object-fit: contain; pointer-events: none; }

.desktop-label {
    font-size: 12px;
    line-height: 1.2;
    color: var(--text-primary);
    word-break: break-word;
}

.folder {
    position: absolute;
    z-index: 30;
    cursor: pointer;
    touch-action: none;
}

.folder-item {
    display: flex;
    flex-direction: column;
    align-items: center;
    width: 100%;
    height: 100%;
    padding: 4px;
    border-radius: 4px;
    box-sizing: border-box;
}

.folder-item:hover { background: rgba(79, 163, 227, 0.2); }
.folder-item img { width: 79px; height: 69px; pointer-events: none; }

.cloud {
    position: absolute;
    z-index: 60;
    max-width: 220px;
    padding: 10px 14px;
    background: #fff;
    border: 1px solid var(--border-color);
    border-radius: 16px;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
    font-size: 14px;
    color: rgba(0, 0, 0, 0.8);
}

.note {
    position: absolute;
    z-index: 20;
    cursor: grab;
    touch-action: none;
}

.todo-note {
    width: 280px;
    height: 220px;
    padding: 16px;
    box-sizing: border-box;
    background: var(--post-it-yellow);
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
    transform: rotate(-2deg);
    user-select: none;
    transition: transform 0.3s ease-out;
    font-size: 14px;
}

.todo-note:hover { transform: translate(4px, -4px) rotate(1deg) scale(1.02); }
.todo-note p { margin: 0 0 2px 0; }
.todo-note .done { text-decoration: line-through; }

.dock-bar {
    position: fixed;
    bottom: 8px;
    left: 0;
    right: 0;
    z-index: 50;
    height: 68px;
    display: flex;
    justify-content: center;
    align-items: flex-end;
    pointer-events: none;
}

.dock {
    position: relative;
    display: flex;
    align-items: flex-end;
    gap: 12px;
    height: 68px;
    padding: 8px 12px;
    box-sizing: border-box;
    pointer-events: auto;
    background: rgba(255, 255, 255, 0.35);
    backdrop-filter: blur(20px);
    border: 1px solid rgba(255, 255, 255, 0.4);
    border-radius: 1.3rem;
}

.dock-slot { position: relative; flex-shrink: 0; width: 48px; height: 48px; }

.dock-icon {
    position: absolute;
    bottom: 0;
    left: 50%;
    cursor: pointer;
}

.dock-icon img { width: 100%; height: 100%; object-fit: contain; pointer-events: none; }

.dock-spotify {
    width: 100%;
    height: 100%;
    border-radius: 22%;
    background: #1db954;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #fff;
    font-size: 60%;
}

.dock-divider { width: 1px; height: 48px; align-self: center; background: rgba(255, 255, 255, 0.2); }

.dock-dot {
    position: absolute;
    bottom: -10px;
    left: 50%;
    transform: translateX(-50%);
    width: 6px;
    height: 6px;
    border-radius: 50%;
    background: #9ca3af;
}

.dock-label {
    position: absolute;
    top: -32px;
    left: 50%;
    transform: translate(-50%, 4px);
    white-space: nowrap;
    padding: 4px 8px;
    border-radius: 16px;
    background: rgba(255, 255, 255, 0.9);
    border: 1px solid rgba(0, 0, 0, 0.1);
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.12);
    font-size: 11px;
    color: #000;
    opacity: 0;
    transition: opacity 0.15s, transform 0.15s;
}

.dock-icon:hover .dock-label { opacity: 1; transform: translate(-50%, 0); }

.dock-badge {
    margin-left: 16px;
    padding: 6px 10px;
    border-radius: 8px;
    background: #fff;
    color: #000;
    font-size: 12px;
    font-weight: 500;
    text-decoration: none;
    box-shadow: 0 4px 14px rgba(0, 0, 0, 0.15);
    pointer-events: auto;
}

.backdrop {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0);
    transition: background-color 0.2s;
}

.backdrop.shown { background: rgba(0, 0, 0, 0.1); }
.backdrop.clear, .backdrop.clear.shown { background: transparent; }

.window {
    position: absolute;
    background: #fff;
    border: 1px solid var(--border-color);
    border-radius: 8px;
    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.2);
    overflow: hidden;
    user-select: none;
    transform-origin: top left;
    opacity: 0;
    transform: scale(0.98) translateY(4px);
    transition: opacity 0.3s cubic-bezier(.22, 1, .36, 1), transform 0.3s cubic-bezier(.22, 1, .36, 1);
}

.window.shown { opacity: 1; transform: none; }
.window.bare { background: transparent; border: none; box-shadow: none; overflow: visible; }

.chrome {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 8px 12px;
    border-bottom: 1px solid var(--border-color);
    background: rgba(255, 255, 255, 0.9);
    cursor: move;
    touch-action: none;
    font-size: 12px;
    color: rgba(0, 0, 0, 0.7);
}

.chrome .title { overflow: hidden; text-overflow: ellipsis; white-space: nowrap; max-width: 60%; margin: 0; }
.chrome .lights, .chrome .actions { display: flex; align-items: center; gap: 8px; }

.light {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    border: none;
    padding: 0;
    cursor: pointer;
}

.light.red { background: var(--system-red); }
.light.yellow { background: var(--system-yellow); }
.light.green { background: var(--system-green); }

.chrome-button {
    background: none;
    border: none;
    padding: 4px;
    border-radius: 4px;
    cursor: pointer;
    color: rgba(0, 0, 0, 0.6);
    font-size: 12px;
    line-height: 1;
}

.chrome-button:hover { background: rgba(0, 0, 0, 0.05); }

.restore-chip {
    position: fixed;
    bottom: 16px;
    left: 16px;
    padding: 8px 12px;
    border-radius: 6px;
    background: #fff;
    border: 1px solid var(--border-color);
    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.12);
    font-size: 14px;
    color: rgba(0, 0, 0, 0.7);
    cursor: pointer;
}

.about-text {
    padding: 16px;
    height: 300px;
    overflow: auto;
    font-size: 13px;
    line-height: 24px;
    color: rgba(0, 0, 0, 0.9);
    white-space: pre-wrap;
    user-select: text;
}

.about-photo { padding: 8px; }
.about-photo img { width: 100%; object-fit: cover; border-radius: 4px; display: block; }

.projects-body { display: flex; min-height: 440px; }

.projects-sidebar {
    width: 224px;
    padding: 12px;
    border-right: 1px solid var(--border-color);
    box-sizing: border-box;
    font-size: 13px;
}

.projects-sidebar h4 {
    margin: 0 0 8px 0;
    font-size: 11px;
    font-weight: 500;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #6b7280;
}

.projects-sidebar ul { list-style: none; margin: 0 0 16px 0; padding: 0; }

.sidebar-entry {
    width: 100%;
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 4px 8px;
    border: none;
    border-radius: 4px;
    background: none;
    text-align: left;
    font: inherit;
    cursor: pointer;
}

.sidebar-entry:hover { background: #f3f4f6; }
.sidebar-entry.active { background: #000; color: #fff; }

.files-grid {
    flex: 1;
    padding: 24px;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 40px;
    align-content: start;
}

.files-empty { grid-column: span 3; text-align: center; font-size: 14px; color: #6b7280; }

.file-entry {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 8px;
    background: none;
    border: none;
    cursor: pointer;
    text-decoration: none;
    color: var(--text-primary);
    font: inherit;
}

.file-entry:hover { opacity: 0.9; }
.file-entry .glyph { width: 64px; height: 64px; display: flex; align-items: center; justify-content: center; font-size: 40px; }
.file-entry .desktop-label { max-width: 160px; }

.webview-body { width: 100%; height: calc(100% - 38px); background: #fff; }
.webview-body iframe, .webview-body object { width: 100%; height: 100%; border: none; }

.faq { padding: 16px; max-height: 340px; overflow: auto; font-size: 14px; }
.faq-item { border-bottom: 1px solid var(--border-color); }

.faq-question {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 8px;
    padding: 12px 0;
    border: none;
    background: none;
    text-align: left;
    font: inherit;
    font-weight: 600;
    cursor: pointer;
}

.faq-answer { padding: 0 0 12px 0; color: rgba(0, 0, 0, 0.75); line-height: 1.5; user-select: text; }

.contact-card {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    box-sizing: border-box;
    padding: 28px 24px;
    border-radius: 30px;
    background: linear-gradient(145deg, #1f2937, #4b5563);
    color: #fff;
    box-shadow: 0 25px 60px rgba(0, 0, 0, 0.35);
    overflow: hidden;
}

.contact-card img { width: 100%; flex: 1; min-height: 0; object-fit: cover; border-radius: 20px; pointer-events: none; }
.contact-card h2 { margin: 12px 0 0 0; font-size: 26px; }
.contact-card .subtitle { margin: 4px 0 0 0; opacity: 0.8; }

.contact-footer {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-top: 16px;
    padding: 10px 14px;
    box-sizing: border-box;
    border-radius: 16px;
    background: rgba(255, 255, 255, 0.12);
    font-size: 13px;
}

.contact-button {
    padding: 8px 14px;
    border: 1px solid rgba(255, 255, 255, 0.3);
    border-radius: 10px;
    background: rgba(255, 255, 255, 0.15);
    color: #fff;
    font: inherit;
    cursor: pointer;
}

.gallery-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 16px;
    padding: 80px 48px 140px 48px;
    box-sizing: border-box;
    height: 100%;
    overflow: auto;
}

.gallery-grid img {
    width: 100%;
    aspect-ratio: 1;
    object-fit: cover;
    border-radius: 16px;
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
}
"#;

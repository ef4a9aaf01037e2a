//! CSS for the page.
//!
//! One stylesheet, inlined by [`crate::components::PortfolioPage`]. The
//! animation keyframes here read the custom properties written by
//! [`crate::motion`] into each element's inline style:
//!
//! - `enter` reads `--enter-from-y`
//! - `drift` reads `--drift-x`, `--drift-y`, `--drift-rotate`
//! - `.motion-press` reads `--hover-scale`, `--press-scale`

/// Complete CSS for the page - pastel gradient, purple type.
pub const PAGE_CSS: &str = r#"
:root {
    --purple-800: #6b21a8;
    --purple-700: #7e22ce;
    --purple-600: #9333ea;
    --pink-200: #fbcfe8;
    --blue-200: #bfdbfe;
    --yellow-100: #fef9c3;
    --green-100: #dcfce7;
    --blue-100: #dbeafe;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

.page {
    min-height: 100vh;
    background: linear-gradient(to bottom, var(--pink-200), var(--blue-200));
}

.container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }

/* ---------- header ---------- */

.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    padding: 1rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.site-title {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--purple-800);
}

.site-nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
.site-nav a { color: var(--purple-800); text-decoration: none; }
.site-nav a:hover { color: var(--purple-600); }

/* ---------- hero ---------- */

.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    position: relative;
    overflow: hidden;
}

.hero-content { text-align: center; z-index: 10; }

.hero-title {
    font-size: 3.75rem;
    font-weight: 700;
    color: var(--purple-800);
    margin: 0 0 1rem;
}

.hero-subtitle { font-size: 1.5rem; color: var(--purple-600); margin: 0 0 2rem; }

.social-links { display: flex; justify-content: center; gap: 1rem; }
.social-links.large { gap: 1.5rem; }

.social-link { display: inline-block; color: var(--purple-800); }
.social-link:hover { color: var(--purple-600); }

.shape {
    position: absolute;
    border-radius: 50%;
    pointer-events: none;
}

/* ---------- sections ---------- */

.section { min-height: 100vh; padding: 5rem 0; }
.section-projects { background: var(--yellow-100); }
.section-about { background: var(--green-100); }
.section-contact { background: var(--blue-100); }

.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--purple-800);
    text-align: center;
    margin: 0 0 3rem;
}

.section-text { font-size: 1.25rem; color: var(--purple-600); margin: 0 0 1.5rem; }

.about-body { max-width: 42rem; margin: 0 auto; }
.contact-body { max-width: 28rem; margin: 0 auto; text-align: center; }

.project-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }

@media (min-width: 768px) {
    .project-grid { grid-template-columns: repeat(2, 1fr); }
}

.project-card {
    background: #fff;
    padding: 1.5rem;
    border-radius: 0.5rem;
    box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1);
}

.project-title { font-size: 1.5rem; font-weight: 700; color: var(--purple-800); margin: 0 0 1rem; }
.project-description { color: var(--purple-600); margin: 0 0 1rem; }

.project-cta {
    display: inline-block;
    background: var(--purple-600);
    color: #fff;
    padding: 0.5rem 1rem;
    border-radius: 0.25rem;
    text-decoration: none;
    transition: background-color 150ms;
}
.project-cta:hover { background: var(--purple-700); }

/* ---------- motion ---------- */

@keyframes enter {
    from { opacity: 0; transform: translateY(var(--enter-from-y, 0)); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes drift {
    from { transform: translate(0, 0) rotate(0deg); }
    to { transform: translate(var(--drift-x, 0), var(--drift-y, 0)) rotate(var(--drift-rotate, 0deg)); }
}

.motion-press { transition: transform 200ms ease-out; }
.motion-press:hover { transform: scale(var(--hover-scale, 1)); }
.motion-press:active { transform: scale(var(--press-scale, 1)); }

@media (prefers-reduced-motion: reduce) {
    .shape { animation: none !important; }
}
"#;

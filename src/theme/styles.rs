//! Global CSS styles for VickreyChain.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INDIGO (Brand, Actions) */
  --indigo-50: #eef2ff;
  --indigo-200: #c7d2fe;
  --indigo-500: #6366f1;
  --indigo-600: #4f46e5;
  --indigo-700: #4338ca;
  --indigo-900: #312e81;

  /* GRAY (Text, Surfaces) */
  --gray-50: #f9fafb;
  --gray-100: #f3f4f6;
  --gray-200: #e5e7eb;
  --gray-400: #9ca3af;
  --gray-500: #6b7280;
  --gray-700: #374151;
  --gray-800: #1f2937;
  --gray-900: #111827;

  /* GREEN (Confirmation) */
  --green-50: #f0fdf4;
  --green-400: #4ade80;
  --green-800: #166534;

  --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  --radius: 0.5rem;
  --shadow: 0 1px 3px rgba(0, 0, 0, 0.1), 0 1px 2px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px rgba(0, 0, 0, 0.1), 0 4px 6px rgba(0, 0, 0, 0.05);
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  color: var(--gray-900);
  line-height: 1.5;
}

.page {
  min-height: 100vh;
  background: linear-gradient(to bottom, var(--indigo-50), #ffffff);
}

.container {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1rem;
}

.block { display: block; }

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  padding: 0;
  margin: -1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
  border: 0;
}

/* === Navigation === */
.nav-bar {
  position: sticky;
  top: 0;
  z-index: 50;
  background: #ffffff;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.nav-inner {
  display: flex;
  justify-content: space-between;
  align-items: center;
  height: 4rem;
}

.brand {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--indigo-600);
}

.nav-links {
  display: none;
  gap: 2rem;
}

.nav-link, .mobile-menu-item {
  color: var(--gray-700);
  font-weight: 500;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.nav-link { padding: 0.5rem 0.75rem; }

.nav-link:hover, .mobile-menu-item:hover { color: var(--indigo-600); }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  border: none;
  border-radius: 0.375rem;
  background: transparent;
  color: var(--gray-400);
  cursor: pointer;
}

.icon-btn:hover { color: var(--gray-500); background: var(--gray-100); }

.menu-icon { width: 1.5rem; height: 1.5rem; }

.mobile-menu { padding: 0.5rem 0 0.75rem; }

.mobile-menu-item {
  display: block;
  padding: 0.5rem 0.75rem;
}

.mobile-menu-item:hover { background: var(--gray-50); }

/* === Buttons === */
.btn-primary, .btn-inverse {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 100%;
  padding: 0.75rem 1.25rem;
  border: 1px solid transparent;
  border-radius: 0.375rem;
  font-size: 1rem;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-primary {
  background: var(--indigo-600);
  color: #ffffff;
  box-shadow: var(--shadow);
}

.btn-primary:hover { background: var(--indigo-700); }

.btn-primary:focus {
  outline: none;
  box-shadow: 0 0 0 2px #ffffff, 0 0 0 4px var(--indigo-500);
}

.btn-inverse {
  background: #ffffff;
  color: var(--indigo-600);
}

.btn-inverse:hover { background: var(--indigo-50); }

/* === Hero === */
.hero { padding: 3rem 0; }

.hero-grid { display: grid; gap: 3rem; }

.hero-copy { text-align: center; }

.hero-title {
  font-size: 1.875rem;
  font-weight: 800;
  letter-spacing: -0.025em;
  color: var(--gray-900);
}

.hero-title .accent { color: var(--indigo-600); }

.hero-lede {
  margin-top: 0.75rem;
  color: var(--gray-500);
}

.hero-form { margin-top: 2rem; }

.early-access-row { display: flex; flex-direction: column; gap: 0.75rem; }

.form-field { flex: 1; min-width: 0; }

.input-field {
  display: block;
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--gray-200);
  border-radius: 0.375rem;
  font-size: 1rem;
  box-shadow: var(--shadow);
}

.input-field:focus {
  outline: none;
  border-color: var(--indigo-500);
  box-shadow: 0 0 0 1px var(--indigo-500);
}

.notice {
  display: flex;
  gap: 0.75rem;
  padding: 1rem;
  border-radius: 0.375rem;
  background: var(--green-50);
  color: var(--green-800);
}

.notice-icon svg { width: 1.25rem; height: 1.25rem; color: var(--green-400); }

.notice-message { font-size: 0.875rem; font-weight: 500; }

.hero-art-card {
  position: relative;
  height: 16rem;
  border-radius: var(--radius);
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: var(--shadow-lg);
}

.hero-art-pattern {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  opacity: 0.2;
}

.hero-art-badge {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.2);
  color: #ffffff;
  font-size: 0.75rem;
  font-weight: 500;
}

.hero-art-center {
  position: relative;
  z-index: 10;
  text-align: center;
  color: #ffffff;
  padding: 0 1rem;
}

.hero-art-center h3 { font-size: 1.125rem; font-weight: 700; margin-bottom: 0.25rem; }

.hero-art-center p { font-size: 0.875rem; opacity: 0.8; }

.hero-art-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, var(--indigo-900), transparent);
  opacity: 0.7;
}

.hero-art-caption {
  position: absolute;
  bottom: 0;
  left: 0;
  right: 0;
  padding: 1rem;
  color: #ffffff;
}

.hero-art-caption-title { font-weight: 500; margin-bottom: 0.25rem; }

.hero-art-caption p { font-size: 0.75rem; opacity: 0.9; }

/* === Sections === */
.section { padding: 3rem 0; }

.section-white { background: #ffffff; }

.section-gray { background: var(--gray-50); }

.section-header { text-align: center; }

.section-eyebrow {
  font-size: 1rem;
  font-weight: 600;
  letter-spacing: 0.025em;
  text-transform: uppercase;
  color: var(--indigo-600);
}

.section-title {
  margin-top: 0.5rem;
  font-size: 1.5rem;
  font-weight: 800;
  letter-spacing: -0.025em;
  color: var(--gray-900);
}

.section-lede {
  max-width: 42rem;
  margin: 1rem auto 0;
  font-size: 1.125rem;
  color: var(--gray-500);
}

.step-grid, .feature-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
  margin-top: 2.5rem;
}

.step-card {
  padding: 1.5rem;
  border: 1px solid var(--gray-100);
  border-radius: var(--radius);
  background: var(--gray-50);
}

.step-number {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  margin-bottom: 1rem;
  border-radius: 0.375rem;
  background: var(--indigo-500);
  color: #ffffff;
  font-size: 1.25rem;
}

.feature-card {
  padding: 1.5rem;
  border-radius: var(--radius);
  background: #ffffff;
  box-shadow: var(--shadow);
}

.feature-icon { font-size: 1.875rem; margin-bottom: 1rem; }

.card-title { font-size: 1.125rem; font-weight: 500; color: var(--gray-900); }

.card-text { margin-top: 0.5rem; color: var(--gray-500); }

.faq-list { margin-top: 2.5rem; }

.faq-item { padding-top: 1.5rem; }

.faq-item + .faq-item {
  margin-top: 1.5rem;
  border-top: 1px solid var(--gray-200);
}

.faq-question { font-size: 1rem; font-weight: 500; color: var(--gray-900); }

.faq-answer { margin-top: 0.5rem; font-size: 0.875rem; color: var(--gray-500); }

/* === Call to Action === */
.cta { background: var(--indigo-700); }

.cta-inner { padding-top: 2.5rem; padding-bottom: 2.5rem; }

.cta-title {
  font-size: 1.5rem;
  font-weight: 800;
  letter-spacing: -0.025em;
  color: #ffffff;
}

.cta-subline { margin-top: 0.25rem; color: var(--indigo-200); }

.cta-action { margin-top: 2rem; }

/* === Footer === */
.footer { background: var(--gray-800); padding: 2rem 0; }

.footer-notice {
  margin-top: 2rem;
  text-align: center;
  font-size: 0.875rem;
  color: var(--gray-400);
}

/* === Responsive === */
@media (min-width: 640px) {
  .container { padding: 0 1.5rem; }
  .menu-toggle, .mobile-menu { display: none; }
  .nav-links { display: flex; align-items: center; }
  .hero { padding: 5rem 0; }
  .hero-title { font-size: 3rem; }
  .hero-lede { font-size: 1.25rem; margin-top: 1.25rem; }
  .hero-form { margin-top: 3rem; }
  .early-access-row { flex-direction: row; }
  .btn-primary { width: auto; }
  .btn-inverse { width: auto; }
  .hero-art-card { height: 24rem; }
  .section { padding: 4rem 0; }
  .section-title { font-size: 2.25rem; }
  .section-lede { font-size: 1.25rem; }
  .step-grid, .feature-grid { gap: 2rem; margin-top: 4rem; }
  .faq-question { font-size: 1.125rem; }
  .faq-answer { font-size: 1rem; }
  .cta-title { font-size: 2.25rem; }
}

@media (min-width: 768px) {
  .step-grid { grid-template-columns: repeat(3, 1fr); }
  .feature-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
  .container { padding: 0 2rem; }
  .hero-grid { grid-template-columns: repeat(2, 1fr); gap: 2rem; align-items: center; }
  .hero-copy { text-align: left; }
  .feature-grid { grid-template-columns: repeat(3, 1fr); }
  .cta-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 4rem;
    padding-bottom: 4rem;
  }
  .cta-action { margin-top: 0; }
}
"#;

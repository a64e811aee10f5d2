//! Global CSS styles for the Rillic landing.
//!
//! Near-black gradient, floating icons, gradient headline.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg-deep: #111827;
  --bg-black: #000000;

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Motion */
  --float-duration: 6s;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-black);
  color: var(--text-primary);
  min-height: 100vh;
  overflow: hidden;
}

/* === Page Layout === */
.home {
  min-height: 100vh;
  position: relative;
  overflow: hidden;
}

.home-backdrop {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom right, var(--bg-deep), var(--bg-black), var(--bg-deep));
}

.home-content {
  position: relative;
  z-index: 10;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 0 1rem 140px;
}

.home-stack {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  flex: 1;
  width: 100%;
  max-width: 56rem;
}

.home-card,
.home-copy {
  flex-shrink: 0;
}

.home-gap {
  height: 44px;
  flex-shrink: 0;
}

.home-copy {
  text-align: center;
}

/* === Floating Icons === */
.floating-icons {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.floating-icon {
  position: absolute;
  animation: float var(--float-duration) ease-in-out infinite;
}

.floating-icon img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: 0.5rem;
  filter: brightness(0.7) saturate(1.2);
}

.floating {
  animation: float var(--float-duration) ease-in-out infinite;
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-20px); }
}

/* === Tilt Card === */
.tilt-card-frame {
  position: relative;
}

.tilt-card {
  position: relative;
  outline: none;
  cursor: pointer;
  touch-action: none;
  user-select: none;
}

.tilt-card:focus-visible {
  outline: 2px solid var(--text-muted);
  outline-offset: 8px;
  border-radius: 24px;
}

.tilt-card__caption {
  position: absolute;
  bottom: -37px;
  left: 50%;
  transform: translateX(-50%);
  text-align: center;
  white-space: nowrap;
  z-index: 10;
  font-size: 21px;
  font-weight: 500;
  color: var(--text-muted);
}

/* === Typography === */
.headline {
  font-size: 1.875rem;
  font-weight: 900;
  text-transform: uppercase;
  line-height: 1.25;
  margin-bottom: 1rem;
}

.gradient-text {
  background: linear-gradient(135deg, #ffffff 0%, #a1a1aa 50%, #ffffff 100%);
  -webkit-background-clip: text;
  background-clip: text;
  -webkit-text-fill-color: transparent;
}

.subline {
  font-size: 1rem;
  font-weight: 500;
  color: var(--text-secondary);
  max-width: 42rem;
  margin: 0 auto;
}

@media (min-width: 640px) {
  .home-content { padding-left: 1.5rem; padding-right: 1.5rem; }
  .headline { font-size: 2.25rem; }
  .subline { font-size: 1.125rem; }
}

@media (min-width: 768px) {
  .headline { font-size: 3rem; }
  .subline { font-size: 1.25rem; }
}

@media (min-width: 1024px) {
  .home-content { padding-left: 2rem; padding-right: 2rem; }
  .headline { font-size: 3.75rem; }
}

@media (min-width: 1280px) {
  .headline { font-size: 4.5rem; }
}
"#;

//! Inline SVG icons injected into theme toggle buttons.

/// Sun: filled core with stroked rays. Shown while the light theme is active.
pub const SUN: &str = r#"<svg class="icon icon-sun" viewBox="0 0 24 24" width="18" height="18" aria-hidden="true" focusable="false" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="sunGrad" x1="0" x2="1" y1="0" y2="1">
      <stop offset="0%" stop-color="currentColor" stop-opacity="0.95"/>
      <stop offset="100%" stop-color="currentColor" stop-opacity="0.7"/>
    </linearGradient>
  </defs>
  <circle cx="12" cy="12" r="4.2" fill="url(#sunGrad)" />
  <g stroke="currentColor" stroke-width="1.4" stroke-linecap="round" stroke-linejoin="round" opacity="0.95">
    <path d="M12 1.8v1.6" />
    <path d="M12 20.6v1.6" />
    <path d="M3.6 4.6l1.1 1.1" />
    <path d="M19.3 17.7l1.1 1.1" />
    <path d="M1.8 12h1.6" />
    <path d="M20.6 12h1.6" />
    <path d="M3.6 19.4l1.1-1.1" />
    <path d="M19.3 6.3l1.1-1.1" />
  </g>
</svg>"#;

/// Crescent moon. Shown while the dark theme is active.
pub const MOON: &str = r#"<svg class="icon icon-moon" viewBox="0 0 24 24" width="18" height="18" aria-hidden="true" focusable="false" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="moonGrad" x1="0" x2="1" y1="0" y2="1">
      <stop offset="0%" stop-color="currentColor" stop-opacity="0.9"/>
      <stop offset="100%" stop-color="currentColor" stop-opacity="0.6"/>
    </linearGradient>
  </defs>
  <path d="M21 12.8A8.8 8.8 0 1 1 11.2 3 6.2 6.2 0 0 0 21 12.8z" fill="url(#moonGrad)" stroke="currentColor" stroke-opacity="0.16" stroke-width="0.8" />
</svg>"#;

//! Global CSS styles for Bearboard.
//!
//! Honey accents on ink and mist; palette documented in bearboard-ui.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* HONEY (Actions, Highlights) */
  --honey: #f2a65a;
  --honey-deep: #d9831f;
  --honey-glow: rgba(242, 166, 90, 0.35);

  /* INK (Text, Borders) */
  --ink: #1f2a44;
  --ink-soft: #4a5573;
  --ink-muted: rgba(31, 42, 68, 0.55);

  /* MIST (Backgrounds) */
  --mist: #f4f6fb;
  --mist-deep: #e3e8f3;
  --paper: #ffffff;

  /* ALERT */
  --alert: #d8000c;
  --alert-bg: #ffbaba;
  --ok: #2e7d32;
  --info: #3c6ea8;

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --radius: 8px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease-in-out;
}

*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(160deg, var(--mist) 0%, var(--mist-deep) 100%);
  color: var(--ink);
  min-height: 100vh;
}

/* === Landing === */
.landing {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  gap: 1.25rem;
  text-align: center;
}

.typewriter-text {
  font-size: 2.5rem;
  font-weight: 700;
  line-height: 1.3;
  min-height: 10rem;
}

.cursor {
  color: var(--honey);
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

/* === Buttons === */
.btn-primary, .btn-key, .btn-secondary, .btn-ghost {
  border: none;
  border-radius: var(--radius);
  cursor: pointer;
  font-family: inherit;
  font-size: 1rem;
  padding: 0.6rem 1.4rem;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-primary {
  background: var(--honey);
  color: var(--ink);
  font-weight: 600;
}

.btn-primary:hover:not(:disabled) { background: var(--honey-deep); }

.btn-primary:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-key {
  background: var(--ink);
  color: var(--mist);
  font-size: 1.2rem;
  padding: 0.9rem 2.2rem;
  box-shadow: 0 4px 16px var(--honey-glow);
}

.btn-key:hover { transform: translateY(-2px); }

.btn-secondary {
  background: transparent;
  border: 1px solid var(--ink-soft);
  color: var(--ink-soft);
}

.btn-ghost {
  background: transparent;
  color: var(--ink-soft);
  text-decoration: underline;
}

.icon-btn {
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: 1.5rem;
  line-height: 1;
}

.close-btn { font-size: 1.75rem; color: var(--ink-muted); }

/* === Inputs === */
.input-field {
  width: 100%;
  padding: 0.7rem 0.9rem;
  border: 1px solid var(--ink-muted);
  border-radius: var(--radius);
  background: var(--paper);
  font-family: inherit;
  font-size: 1rem;
  color: var(--ink);
}

.input-field:focus {
  outline: none;
  border-color: var(--honey);
  box-shadow: 0 0 0 3px var(--honey-glow);
}

.textarea-container { width: 100%; }

.query-box { resize: vertical; min-height: 6rem; }

.password-wrapper {
  position: relative;
  width: 100%;
}

.toggle-password-btn {
  position: absolute;
  right: 0.6rem;
  top: 50%;
  transform: translateY(-50%);
  background: transparent;
  border: none;
  cursor: pointer;
}

.eye-icon { font-size: 1.2rem; }

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(31, 42, 68, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
}

.modal-dialog {
  position: relative;
  background: var(--paper);
  border-radius: 12px;
  padding: 2rem;
  width: min(420px, 90vw);
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.2);
}

.modal-close {
  position: absolute;
  top: 0.5rem;
  right: 0.75rem;
}

/* === Login form === */
.login-form {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.login-btn { width: 100%; }

.bear-avatar-wrapper {
  width: 130px;
  height: 130px;
  display: flex;
  align-items: center;
  justify-content: center;
}

.bear-avatar {
  border-radius: 50%;
  pointer-events: none;
  user-select: none;
}

/* === Dashboard === */
.dashboard-container {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 4rem 2rem 2rem;
  max-width: 1400px;
  margin: 0 auto;
}

.top-bar {
  position: absolute;
  top: 10px;
  right: 20px;
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.query-warning {
  width: 100%;
  color: var(--alert);
  background: var(--alert-bg);
  padding: 8px;
  border-radius: 5px;
  font-weight: bold;
}

.error-text { color: var(--alert); font-weight: 600; }

.button-row {
  display: flex;
  gap: 1rem;
}

.dashboard-frame {
  margin-top: 30px;
  transition: width var(--transition-normal);
}

.dashboard-title { text-align: center; margin-bottom: 1rem; }

.dashboard-frame-body {
  display: flex;
  flex-direction: column;
  align-items: center;
  width: 100%;
}

.dashboard-iframe {
  width: 100%;
  height: 650px;
  border: 1px solid #ccc;
  border-radius: var(--radius);
  background: var(--paper);
}

.dashboard-link { margin-top: 15px; }

.dashboard-link a { color: var(--info); }

/* === Chat history === */
.chat-container {
  width: 100%;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.chat-bubble-wrapper { display: flex; justify-content: flex-end; }

.chat-bubble {
  padding: 0.6rem 0.9rem;
  border-radius: 14px;
  max-width: 70%;
}

.user-bubble { background: var(--honey-glow); }

.info-bubble { background: var(--mist-deep); color: var(--ink-soft); align-self: center; }

.timestamp {
  display: block;
  font-size: 0.75rem;
  color: var(--ink-muted);
  margin-top: 0.25rem;
  text-align: right;
}

/* === Loading overlay === */
.loading-overlay {
  position: fixed;
  inset: 0;
  background: rgba(150, 110, 110, 0.7);
  backdrop-filter: blur(4px);
  z-index: 9999;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}

.loading-spinner {
  width: 96px;
  height: 96px;
  border: 8px solid var(--mist);
  border-top-color: var(--honey);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.loading-caption {
  margin-top: 1rem;
  font-size: 25px;
  font-style: italic;
  color: #000;
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  top: 1rem;
  right: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 10000;
}

.toast {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.7rem 1rem;
  border-radius: var(--radius);
  background: var(--paper);
  box-shadow: 0 4px 14px rgba(0, 0, 0, 0.15);
  cursor: pointer;
  min-width: 220px;
}

.toast-success .toast-icon { color: var(--ok); }
.toast-error .toast-icon { color: var(--alert); }
.toast-info .toast-icon { color: var(--info); }
"#;

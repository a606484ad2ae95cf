//! Global CSS styles for CV Forge.
//!
//! Colors come from the active theme's `--color-*` custom properties, which
//! the app installs in a separate `:root` rule.

pub const GLOBAL_STYLES: &str = r#"
/* === Layout tokens === */
:root {
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --radius: 0.5rem;
  --shadow-card: 0 10px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--color-background);
  color: var(--color-text);
  line-height: 1.6;
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.app-shell {
  max-width: 56rem;
  margin: 0 auto;
  padding: 2rem 1rem 4rem;
}

/* === Header === */
.page-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 2rem;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  color: var(--color-heading);
}

.page-subtitle {
  font-size: var(--text-sm);
  opacity: 0.8;
}

/* === Cards === */
.card {
  background: var(--color-card-bg);
  border: 1px solid var(--color-card-border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  padding: 2rem;
}

.section-title {
  font-size: var(--text-base);
  font-weight: 600;
  color: var(--color-heading);
  margin-bottom: 1rem;
}

.form-section + .form-section {
  margin-top: 2rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.6rem 1.25rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), opacity var(--transition-fast);
  text-decoration: none;
}

.btn-primary {
  background: var(--color-primary);
  color: #ffffff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--color-secondary);
}

.btn-primary:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-ghost {
  background: transparent;
  border-color: var(--color-card-border);
  color: var(--color-text);
}

.btn-ghost:hover {
  background: rgba(107, 114, 128, 0.1);
}

/* === Theme switcher === */
.theme-switcher {
  position: relative;
}

.theme-switcher-backdrop {
  position: fixed;
  inset: 0;
  z-index: 10;
}

.theme-swatch {
  width: 1rem;
  height: 1rem;
  border-radius: 9999px;
  flex-shrink: 0;
}

.theme-chevron {
  transition: transform var(--transition-fast);
}

.theme-chevron.open {
  transform: rotate(180deg);
}

.theme-options {
  position: absolute;
  right: 0;
  margin-top: 0.5rem;
  width: 14rem;
  list-style: none;
  padding: 0.25rem 0;
  background: var(--color-card-bg);
  border: 1px solid var(--color-card-border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  z-index: 20;
  overflow: hidden;
}

.theme-option {
  width: 100%;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.5rem 1rem;
  background: transparent;
  border: none;
  color: var(--color-text);
  font-size: var(--text-sm);
  text-align: left;
  cursor: pointer;
}

.theme-option:hover,
.theme-option.active {
  background: rgba(107, 114, 128, 0.1);
}

/* === Photo slots === */
.photo-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1rem;
}

.photo-slot-label {
  display: block;
  text-align: center;
  font-size: var(--text-sm);
  font-weight: 500;
  margin-bottom: 0.5rem;
}

.photo-slot {
  position: relative;
  width: 100%;
  aspect-ratio: 3 / 4;
  display: flex;
  justify-content: center;
  align-items: center;
  border: 2px dashed var(--color-input-border);
  border-radius: var(--radius);
  background: var(--color-input-bg);
  overflow: hidden;
  cursor: pointer;
  transition: border-color var(--transition-normal);
}

.photo-slot:hover {
  border-color: var(--color-primary);
}

.photo-slot-placeholder {
  text-align: center;
  font-size: var(--text-xs);
  opacity: 0.7;
}

.photo-slot-preview {
  position: absolute;
  inset: 0;
  background-repeat: no-repeat;
}

.photo-slot-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
  color: #ffffff;
  font-size: var(--text-sm);
  font-weight: 600;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.photo-slot:hover .photo-slot-overlay {
  opacity: 1;
}

.photo-slot-status {
  font-size: var(--text-xs);
  text-align: center;
  margin-top: 0.25rem;
  opacity: 0.8;
}

.photo-slot-status.error {
  color: #dc2626;
  opacity: 1;
}

.photo-slot-clear {
  display: block;
  margin: 0.25rem auto 0;
  background: none;
  border: none;
  color: var(--color-text);
  font-size: var(--text-xs);
  text-decoration: underline;
  cursor: pointer;
  opacity: 0.7;
}

/* === Inputs === */
.field-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.field-label {
  display: block;
  font-size: var(--text-sm);
  font-weight: 500;
  margin-bottom: 0.25rem;
}

.input-style {
  width: 100%;
  padding: 0.5rem 0.75rem;
  font-size: var(--text-sm);
  background: var(--color-input-bg);
  border: 1px solid var(--color-input-border);
  border-radius: calc(var(--radius) - 0.125rem);
  color: var(--color-input-text);
}

.input-style:focus {
  outline: none;
  border-color: var(--color-primary);
}

/* === Experience rows === */
.experience-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.experience-rows {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin-top: 1rem;
}

.experience-row {
  display: grid;
  grid-template-columns: 6fr 5fr 1fr;
  gap: 0.5rem;
  align-items: center;
  animation: fade-in var(--transition-normal);
}

.experience-remove {
  background: none;
  border: none;
  color: #9ca3af;
  font-size: var(--text-base);
  cursor: pointer;
}

.experience-remove:hover {
  color: #ef4444;
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(-4px); }
  to { opacity: 1; transform: none; }
}

/* === Submit area === */
.form-actions {
  display: flex;
  justify-content: flex-end;
  margin-top: 2rem;
}

.generating-indicator {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: 0.75rem;
  margin-top: 2rem;
  font-size: var(--text-sm);
}

.spinner {
  width: 1.25rem;
  height: 1.25rem;
  border: 2px solid var(--color-card-border);
  border-top-color: var(--color-primary);
  border-radius: 9999px;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.error-container {
  margin-top: 1.5rem;
  padding: 0.75rem 1rem;
  border: 1px solid #fca5a5;
  border-radius: var(--radius);
  background: #fef2f2;
  color: #991b1b;
  font-size: var(--text-sm);
}

.error-title {
  font-weight: 600;
}

/* === Result === */
.result-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-bottom: 1.5rem;
}

.result-status {
  font-size: var(--text-sm);
  margin-bottom: 1rem;
}

.pdf-preview {
  width: 100%;
  height: 70vh;
  border: 1px solid var(--color-card-border);
  border-radius: var(--radius);
  background: #ffffff;
}

.pdf-preview-empty {
  padding: 3rem;
  text-align: center;
  opacity: 0.7;
}
"#;

// the handful of utility classes the components build on.  class lists are
// combined with cn!, which knows which of these fight over the same property
pub const UTILITIES: &str = r#"
/* Utilities */
.flex { display: flex; }
.grid { display: grid; }
.hidden { display: none; }
.flex-col { flex-direction: column; }
.flex-wrap { flex-wrap: wrap; }
.items-center { align-items: center; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }
.text-center { text-align: center; }

.gap-2 { gap: var(--space-2); }
.gap-4 { gap: var(--space-4); }
.gap-6 { gap: var(--space-6); }
.space-y-3 > * + * { margin-top: var(--space-3); }
.space-y-4 > * + * { margin-top: var(--space-4); }
.space-y-6 > * + * { margin-top: var(--space-6); }
.space-y-24 > * + * { margin-top: var(--space-24); }
.mt-6 { margin-top: var(--space-6); }
.px-3 { padding-left: var(--space-3); padding-right: var(--space-3); }
.py-1 { padding-top: var(--space-1); padding-bottom: var(--space-1); }
.py-8 { padding-top: var(--space-8); padding-bottom: var(--space-8); }
.py-10 { padding-top: var(--space-10); padding-bottom: var(--space-10); }
.p-6 { padding: var(--space-6); }

.h-full { height: 100%; }
.overflow-hidden { overflow: hidden; }
.rounded-lg { border-radius: var(--radius-lg); }

.text-sm { font-size: 0.875rem; }
.text-xl { font-size: 1.25rem; }
.text-3xl { font-size: 1.875rem; line-height: 2.25rem; }
.text-4xl { font-size: 2.25rem; line-height: 2.5rem; }
.font-medium { font-weight: 500; }
.font-semibold { font-weight: 600; }
.font-bold { font-weight: 700; }
.tracking-tight { letter-spacing: -0.025em; }

.text-primary { color: var(--primary); }
.text-muted-foreground { color: var(--muted-foreground); }
.bg-muted { background-color: var(--muted); }

.hover-primary { transition: color var(--transition-fast) var(--easing-standard); }
.hover-primary:hover { color: var(--primary); text-decoration: none; }

@media (min-width: 640px) {
  .sm\:text-xl { font-size: 1.25rem; }
  .sm\:text-5xl { font-size: 3rem; line-height: 1; }
}

@media (min-width: 768px) {
  .md\:grid-cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .md\:flex-row { flex-direction: row; }
  .md\:text-6xl { font-size: 3.75rem; line-height: 1; }
  .md\:mt-0 { margin-top: 0; }
}

@media (min-width: 1024px) {
  .lg\:grid-cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}
"#;

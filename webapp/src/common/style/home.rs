pub const HOME_STYLES: &str = r#"
/* Portfolio Page Styles */

.page {
  min-height: 100vh;
  background-color: var(--background);
}

/* Header */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  width: 100%;
  border-bottom: 1px solid var(--border);
  background-color: var(--background-translucent);
  backdrop-filter: blur(8px);
}

.site-header .container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--foreground);
}

.brand:hover {
  text-decoration: none;
}

.site-nav {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.nav-link {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--foreground);
}

/* the anchors collapse into the brand row on phones */
.site-nav.compact {
  gap: var(--space-3);
}

/* Hero */
.hero {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: calc(100vh - var(--header-height));
  text-align: center;
}

.hero-tagline {
  max-width: 42rem;
}

/* About */
.contact-panel {
  display: flex;
  flex-direction: column;
  justify-content: center;
}

.contact-row {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.contact-icon {
  width: 1.25rem;
  color: var(--primary);
  font-weight: 700;
  text-align: center;
}

.copy-status {
  font-size: 0.75rem;
  color: var(--muted-foreground);
}

/* Footer */
.site-footer {
  border-top: 1px solid var(--border);
}

.social-links {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

/* Not found */
.not-found {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-height: 60vh;
  gap: var(--space-4);
}
"#;

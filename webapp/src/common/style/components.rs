pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  width: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-8);
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  height: 2.5rem;
  padding: 0 var(--space-4);
  border-radius: var(--radius-md);
  font-size: 0.875rem;
  font-weight: 500;
  cursor: pointer;
  border: 1px solid transparent;
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  text-decoration: none;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--primary-foreground);
}

.btn-primary:hover {
  background-color: var(--primary-hover);
}

.btn-outline {
  background-color: var(--background);
  border-color: var(--border);
  color: var(--foreground);
}

.btn-outline:hover {
  background-color: var(--muted);
}

.btn-ghost {
  background-color: transparent;
  color: var(--foreground);
}

.btn-ghost:hover {
  background-color: var(--muted);
}

.btn-sm {
  height: 2.25rem;
  padding: 0 var(--space-3);
}

/* Cards */
.card {
  display: flex;
  flex-direction: column;
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  background-color: var(--card);
  box-shadow: var(--shadow-sm);
  transition: box-shadow var(--transition-card) var(--easing-standard);
}

.card:hover {
  box-shadow: var(--shadow-lg);
}

.card-header {
  padding: var(--space-6);
}

.card-title {
  font-size: 1.5rem;
  font-weight: 600;
  line-height: 1.2;
}

.card-content {
  flex: 1;
  padding: 0 var(--space-6) var(--space-6);
}

.card-footer {
  display: flex;
  align-items: center;
  padding: 0 var(--space-6) var(--space-6);
}

/* Badges */
.badge {
  display: inline-flex;
  align-items: center;
  border-radius: var(--radius-full);
  padding: 2px 10px;
  font-size: 0.75rem;
  font-weight: 600;
  background-color: var(--badge);
  color: var(--badge-foreground);
}

.badge-secondary {
  background-color: var(--badge-secondary);
  color: var(--badge-secondary-foreground);
}

.skill-badge {
  display: inline-block;
  transition: transform var(--transition-fast) var(--easing-standard);
}

/* the entrance animation owns the wrapper's transform, so hover goes one level down */
.skill-badge:hover {
  transform: scale(1.05);
}

/* Video */
.demo-video {
  max-width: 100%;
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
}
"#;

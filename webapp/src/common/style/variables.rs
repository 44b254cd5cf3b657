pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #2563EB;
  --primary-hover: #1D4ED8;
  --primary-foreground: #FFFFFF;

  /* Surfaces */
  --background: #FFFFFF;
  --background-translucent: rgba(255, 255, 255, 0.85);
  --foreground: #0F172A;
  --muted: #F1F5F9;
  --muted-foreground: #64748B;
  --card: #FFFFFF;
  --border: #E2E8F0;

  /* Badges */
  --badge: #0F172A;
  --badge-foreground: #F8FAFC;
  --badge-secondary: #F1F5F9;
  --badge-secondary-foreground: #0F172A;

  /* Layout */
  --header-height: 4rem;
  --container-width: 1400px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-24: 96px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-card: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* the theme provider puts .dark on the root element */
:root.dark {
  --primary: #3B82F6;
  --primary-hover: #60A5FA;
  --primary-foreground: #0F172A;

  --background: #020817;
  --background-translucent: rgba(2, 8, 23, 0.85);
  --foreground: #F8FAFC;
  --muted: #1E293B;
  --muted-foreground: #94A3B8;
  --card: #020817;
  --border: #1E293B;

  --badge: #F8FAFC;
  --badge-foreground: #0F172A;
  --badge-secondary: #1E293B;
  --badge-secondary-foreground: #F8FAFC;

  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.5), 0 4px 6px -2px rgba(0, 0, 0, 0.3);
}"#;

//! CSS styles for the site

/// Complete offline CSS styles
pub const CUSTOM_STYLES: &str = r#"
    /* Reset & Base */
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    html, body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
        color: #eee;
        min-height: 100%;
    }

    a {
        color: #22d3ee;
        text-decoration: none;
    }
    a:hover {
        text-decoration: underline;
    }

    /* Main Container */
    .main-container {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
    }

    /* Site Header */
    .site-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 12px 24px;
        background: linear-gradient(to right, #020617, #0f172a);
        border-bottom: 1px solid rgba(34, 211, 238, 0.2);
    }
    .site-title {
        font-size: 18px;
        font-weight: 600;
        color: #d1d5db;
        letter-spacing: 0.5px;
    }

    /* Navigation */
    .tab-bar {
        display: flex;
        gap: 4px;
    }
    .tab-item {
        padding: 8px 16px;
        color: #9ca3af;
        border-bottom: 2px solid transparent;
        transition: all 0.2s;
    }
    .tab-item:hover {
        color: #e5e7eb;
        text-decoration: none;
    }
    .tab-item.tab-active {
        color: #22d3ee;
        border-bottom-color: #22d3ee;
    }

    /* Content Area */
    .content-area {
        max-width: 1152px;
        margin: 0 auto;
        padding: 20px;
        flex: 1;
        width: 100%;
    }

    /* Pages */
    .page-title {
        font-size: 24px;
        margin-bottom: 8px;
        color: #22d3ee;
        font-weight: bold;
    }
    .page-subtitle {
        color: #9ca3af;
        margin-bottom: 16px;
    }
    .page-body {
        padding: 16px;
        background: rgba(255, 255, 255, 0.05);
        border-radius: 12px;
        line-height: 1.6;
    }
    .tag-list {
        display: flex;
        flex-wrap: wrap;
        gap: 8px;
        margin-top: 12px;
    }
    .tag-chip {
        padding: 2px 10px;
        border: 1px solid rgba(34, 211, 238, 0.4);
        border-radius: 999px;
        font-size: 13px;
    }
"#;

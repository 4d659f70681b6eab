//! `GET /`: the single page that mounts the directory view.

use axum::response::Html;

/// Loads the compiled view module from `/static/pkg` and mounts it on `#app`.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Job Hunt Pipeline</title>
    <link rel="stylesheet" href="/static/directory.css">
</head>
<body>
<div id="app"></div>
<script type="module">
    import init, { mount } from '/static/pkg/jobhunt_view.js';
    await init();
    mount('app');
</script>
</body>
</html>
"#;

pub(super) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_mounts_view_module() {
        let Html(body) = index().await;
        assert!(body.contains(r#"<div id="app"></div>"#));
        assert!(body.contains("/static/pkg/jobhunt_view.js"));
        assert!(body.contains("mount('app')"));
    }
}

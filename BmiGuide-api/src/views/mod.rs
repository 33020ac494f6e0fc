//! HTML rendering for the calculator pages
//!
//! Every page shares one document shell; the functions in [`pages`] only
//! produce the markup placed inside it.

pub mod pages;

pub use pages::{error_page, home_page, result_page};

const STYLES: &str = include_str!("assets/styles.css");
const FORM_SCRIPT: &str = include_str!("assets/form.js");

/// Wrap page content in the shared HTML document
pub fn html_template(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{STYLES}
    </style>
</head>
<body>
    <div class="container">
{content}
    </div>
    <script>
{FORM_SCRIPT}
    </script>
</body>
</html>
"#
    )
}

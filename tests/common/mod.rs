// Shared test helpers for integration tests
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// A summary document in the shape the renderer produces: one style element
/// in the head and a single `div.container` holding the run statistics.
pub fn sample_summary_html() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Karate Test Report</title>
<style>.summary-note { color: #444; }</style>
</head>
<body>
<div class="container">
<h1>Karate Test Report</h1>
<div class="summary">
<p><strong>Total Features:</strong> 2</p>
<p><strong>Scenarios:</strong> 5</p>
<p><strong>Passed:</strong> 4</p>
<p><strong>Failed:</strong> 1</p>
<p><strong>Duration:</strong> 00:00:12.345</p>
</div>
</div>
</body>
</html>
"#
    .to_string()
}

/// A feature report document with a single `div.container` content root.
pub fn sample_feature_html(heading: &str, body_text: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{heading}</title>
</head>
<body>
<div class="container">
<h1>{heading}</h1>
<div class="scenario"><p>{body_text}</p></div>
</div>
</body>
</html>
"#
    )
}

/// Lays out a reports directory holding the summary plus the `checkout`
/// and `login` feature reports.
pub fn setup_reports_dir() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    write_reports(temp_dir.path());
    temp_dir
}

/// Writes the standard report fixture files into `dir`.
pub fn write_reports(dir: &Path) {
    fs::write(dir.join("karate-summary.html"), sample_summary_html())
        .expect("Failed to write summary fixture");
    fs::write(
        dir.join("checkout.html"),
        sample_feature_html("Checkout Feature", "User pays with a saved card"),
    )
    .expect("Failed to write checkout fixture");
    fs::write(
        dir.join("login.html"),
        sample_feature_html("Login Feature", "User signs in with valid credentials"),
    )
    .expect("Failed to write login fixture");
}

/// A test-run results document covering two features, five scenarios,
/// four passed and one failed, with step details on the failing step.
pub fn sample_run_results_json() -> String {
    r#"{
  "featureCount": 2,
  "scenarioCount": 5,
  "passCount": 4,
  "failCount": 1,
  "duration": 12345.0,
  "features": [
    {
      "name": "Checkout Feature",
      "tags": ["@smoke"],
      "scenarios": [
        {
          "name": "Pay with saved card",
          "tags": [],
          "passed": true,
          "steps": [
            {"prefix": "Given", "text": "a signed-in user", "passed": true},
            {"prefix": "When", "text": "the user pays", "passed": true,
             "resultText": "{\"status\": \"PAID\"}"}
          ]
        },
        {
          "name": "Pay with expired card",
          "tags": ["@negative"],
          "passed": false,
          "steps": [
            {"prefix": "Given", "text": "a signed-in user", "passed": true},
            {"prefix": "When", "text": "the user pays with an expired card", "passed": false,
             "errorMessage": "card expired 2024-01"}
          ]
        },
        {
          "name": "Pay with new card",
          "tags": [],
          "passed": true,
          "steps": [
            {"prefix": "When", "text": "the user enters card details", "passed": true}
          ]
        }
      ]
    },
    {
      "name": "Login Feature",
      "tags": [],
      "scenarios": [
        {
          "name": "Valid credentials",
          "tags": [],
          "passed": true,
          "steps": [
            {"prefix": "Given", "text": "a registered user", "passed": true},
            {"prefix": "Then", "text": "the dashboard loads", "passed": true}
          ]
        },
        {
          "name": "Remembered session",
          "tags": [],
          "passed": true,
          "steps": [
            {"prefix": "Given", "text": "a remembered session", "passed": true}
          ]
        }
      ]
    }
  ]
}
"#
    .to_string()
}

//! `package.json` for a generated exercise: Jest with Babel, test scripts.

use crate::config::PackageConfig;

/// Render the manifest for the exercise whose title slug is `slug`.
///
/// Written from a template rather than through `serde_json::Value` so the
/// keys keep their conventional npm order.
pub fn render_package_json(slug: &str, config: &PackageConfig) -> String {
    let name = json_string(&format!("{}-{}", config.name_prefix, slug));
    let description = json_string(&config.description);
    let repository_url = json_string(&config.repository_url);

    format!(
        r#"{{
  "name": {name},
  "version": "0.0.0",
  "description": {description},
  "private": true,
  "repository": {{
    "type": "git",
    "url": {repository_url}
  }},
  "devDependencies": {{
    "@babel/core": "^7.3.3",
    "@babel/preset-env": "^7.3.1",
    "babel-jest": "^24.1.0",
    "jest": "^24.1.0"
  }},
  "jest": {{
    "modulePathIgnorePatterns": [
      "package.json"
    ]
  }},
  "babel": {{
    "presets": [
      "@babel/preset-env"
    ]
  }},
  "scripts": {{
    "test": "jest --no-cache ./*",
    "watch": "jest --no-cache --watch ./*"
  }},
  "license": "MIT",
  "dependencies": {{}}
}}
"#
    )
}

fn json_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

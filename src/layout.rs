//! The compiled-in Electron project layout.
//!
//! Two views of the same tree live here. [`VALIDATION_SPEC`] describes everything a finished
//! checkout must contain. [`SCAFFOLD_SPEC`] is what `setup-project` walks; it leaves out
//! `package-lock.json`, which only `npm install` produces. The assets written by hand before
//! scaffolding stay in both views and are kept away from the scaffolder by [`SKIP_LIST`].
use crate::structure::SpecNode;
use indexmap::{IndexMap, IndexSet};

/// Top-level entries `setup-project` never visits.
pub const SKIP_LIST: [&str; 4] = [
    ".github",
    "CODING_GUIDELINES.md",
    "PROJECT_STRUCTURE.md",
    "README.md",
];

/// Top-level files that only exist after tooling outside this crate has run.
pub const GENERATED_BY_TOOLING: [&str; 1] = ["package-lock.json"];

lazy_static::lazy_static! {
    pub static ref VALIDATION_SPEC: SpecNode = validation_spec();
    pub static ref SCAFFOLD_SPEC: SpecNode = scaffold_spec();
    pub static ref SKIP_SET: IndexSet<String> = SKIP_LIST.iter().map(|name| name.to_string()).collect();
    pub static ref SAMPLE_CONTENTS: IndexMap<String, String> = SAMPLES
        .iter()
        .map(|(path, content)| (path.to_string(), content.to_string()))
        .collect();
}

fn github() -> SpecNode {
    SpecNode::branch([
        (
            "workflows",
            SpecNode::branch([("validate-structure.yml", SpecNode::FILE)]),
        ),
        (
            "ISSUE_TEMPLATE",
            SpecNode::branch([("FEATURE_REQUEST.md", SpecNode::FILE)]),
        ),
    ])
}

fn src() -> SpecNode {
    SpecNode::branch([
        ("main.js", SpecNode::FILE),
        ("preload.js", SpecNode::FILE),
        (
            "renderer",
            SpecNode::branch([
                ("index.html", SpecNode::FILE),
                ("renderer.js", SpecNode::FILE),
                ("style.css", SpecNode::FILE),
            ]),
        ),
    ])
}

fn tests() -> SpecNode {
    SpecNode::branch([
        (
            "unit",
            SpecNode::branch([
                ("test_main.js", SpecNode::FILE),
                ("test_renderer.js", SpecNode::FILE),
            ]),
        ),
        (
            "integration",
            SpecNode::branch([
                ("test_integration.js", SpecNode::FILE),
                ("helper.js", SpecNode::FILE),
            ]),
        ),
    ])
}

fn docs() -> SpecNode {
    SpecNode::branch([
        (
            "source",
            SpecNode::branch([
                ("index.md", SpecNode::FILE),
                ("config.yml", SpecNode::FILE),
            ]),
        ),
        // generated documentation lands here, may be empty
        ("build", SpecNode::DIR),
    ])
}

fn scripts() -> SpecNode {
    SpecNode::branch([
        ("validate_structure.js", SpecNode::FILE),
        ("build.js", SpecNode::FILE),
    ])
}

fn vendor() -> SpecNode {
    // bundled Node.js runtime
    SpecNode::branch([("node", SpecNode::DIR)])
}

/// Every entry a complete checkout must contain.
pub fn validation_spec() -> SpecNode {
    SpecNode::branch([
        (".github", github()),
        ("src", src()),
        ("tests", tests()),
        ("dist", SpecNode::DIR),
        ("docs", docs()),
        ("scripts", scripts()),
        ("vendor", vendor()),
        ("node_modules", SpecNode::DIR),
        (".gitignore", SpecNode::FILE),
        ("package.json", SpecNode::FILE),
        ("package-lock.json", SpecNode::FILE),
        ("README.md", SpecNode::FILE),
        ("CODING_GUIDELINES.md", SpecNode::FILE),
        ("PROJECT_STRUCTURE.md", SpecNode::FILE),
        ("LICENSE", SpecNode::FILE),
        ("electron-packager-config.json", SpecNode::FILE),
    ])
}

/// The entries `setup-project` creates when missing, skip-listed ones aside.
pub fn scaffold_spec() -> SpecNode {
    SpecNode::branch([
        (".github", github()),
        ("src", src()),
        ("tests", tests()),
        ("dist", SpecNode::DIR),
        ("docs", docs()),
        ("scripts", scripts()),
        ("vendor", vendor()),
        ("node_modules", SpecNode::DIR),
        (".gitignore", SpecNode::FILE),
        ("package.json", SpecNode::FILE),
        ("README.md", SpecNode::FILE),
        ("CODING_GUIDELINES.md", SpecNode::FILE),
        ("PROJECT_STRUCTURE.md", SpecNode::FILE),
        ("LICENSE", SpecNode::FILE),
        ("electron-packager-config.json", SpecNode::FILE),
    ])
}

const SAMPLES: [(&str, &str); 17] = [
    (
        "src/main.js",
        r#"// Sample main.js for Electron
const { app, BrowserWindow } = require('electron');
function createWindow() {
  const win = new BrowserWindow({
    width: 800,
    height: 600,
    webPreferences: { preload: __dirname + '/preload.js' }
  });
  win.loadFile('src/renderer/index.html');
}
app.whenReady().then(createWindow);
app.on('window-all-closed', () => { if (process.platform !== 'darwin') app.quit(); });
"#,
    ),
    (
        "src/preload.js",
        r#"// Sample preload.js
window.addEventListener('DOMContentLoaded', () => {
  console.log('Preload script loaded.');
});
"#,
    ),
    (
        "src/renderer/index.html",
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <title>Sample Electron App</title>
  <link rel="stylesheet" href="style.css">
</head>
<body>
  <h1>Hello, Electron!</h1>
  <script src="renderer.js"></script>
</body>
</html>
"#,
    ),
    (
        "src/renderer/renderer.js",
        r#"// Sample renderer.js
console.log('Renderer process loaded.');
"#,
    ),
    (
        "src/renderer/style.css",
        r#"/* Sample style.css */
body {
  font-family: Arial, sans-serif;
  background-color: #f0f0f0;
}
"#,
    ),
    (
        "tests/unit/test_main.js",
        r#"// Sample test_main.js
const assert = require('assert');
describe('Main Process', () => {
  it('should run sample test', () => {
    assert.strictEqual(1, 1);
  });
});
"#,
    ),
    (
        "tests/unit/test_renderer.js",
        r#"// Sample test_renderer.js
const assert = require('assert');
describe('Renderer Process', () => {
  it('should run sample test', () => {
    assert.strictEqual(1, 1);
  });
});
"#,
    ),
    (
        "tests/integration/test_integration.js",
        r#"// Sample test_integration.js
const assert = require('assert');
describe('Integration Test', () => {
  it('should run sample integration test', () => {
    assert.strictEqual(1, 1);
  });
});
"#,
    ),
    (
        "tests/integration/helper.js",
        r#"// Sample helper.js for tests
module.exports = {};
"#,
    ),
    (
        "docs/source/index.md",
        r#"# Sample Documentation
This is a sample documentation file for the Electron project.
"#,
    ),
    (
        "docs/source/config.yml",
        r#"# Sample configuration for documentation generator (e.g., MkDocs)
site_name: "Sample Electron App Documentation"
"#,
    ),
    (
        "scripts/validate_structure.js",
        r#"#!/usr/bin/env node
// Sample validate_structure.js
console.log('Validation script placeholder.');
"#,
    ),
    (
        "scripts/build.js",
        r#"#!/usr/bin/env node
// Sample build.js
console.log('Build script placeholder.');
"#,
    ),
    (
        ".gitignore",
        r#"# Sample .gitignore
node_modules/
dist/
vendor/
docs/build/
"#,
    ),
    (
        "package.json",
        r#"{
  "name": "sample-electron-app",
  "productName": "Sample App",
  "version": "0.1.0",
  "main": "src/main.js",
  "scripts": {
    "start": "electron .",
    "build": "electron-packager . --overwrite --out=dist"
  },
  "devDependencies": {
    "@electron/packager": "^18.3.6",
    "electron": "^34.1.0",
    "moment": "^2.30.1"
  }
}
"#,
    ),
    (
        "LICENSE",
        r#"MIT License

Copyright (c) [year] [fullname]

Permission is hereby granted... (add the full license text as needed)"#,
    ),
    (
        "electron-packager-config.json",
        r#"{
  "name": "sample-electron-app",
  "platform": "all",
  "arch": "all"
}
"#,
    ),
];

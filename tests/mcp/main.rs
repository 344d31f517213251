use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary project; the `.git` marker keeps the config file
/// search inside it.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with source files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_files(&[
    ///     ("src/app.ts", "// TODO(alice) fix\nexport {};\n"),
    /// ])?;
    /// ```
    pub fn with_files(files: &[(&str, &str)]) -> Result<Self> {
        let fixture = Self::new()?;
        for (path, content) in files {
            fixture.write_file(path, content)?;
        }
        Ok(fixture)
    }

    pub fn write_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .todoctlrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".todoctlrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }

    /// Absolute path of a project file, as reported in results
    pub fn path_of(&self, relative_path: &str) -> String {
        self.root_path()
            .join(relative_path)
            .to_string_lossy()
            .to_string()
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// A project with a few TODOs spread over assignees and files
pub fn fixture_with_todos() -> Result<McpTestFixture> {
    McpTestFixture::with_files(&[
        (
            "src/app.ts",
            "// TODO(alice): Here is a\n// multi line todo\nexport const a = 1; // FIXME unassigned\n",
        ),
        (
            "src/components/button.tsx",
            "export const Button = () => (\n  <button>\n    {/* TODO(bob) label */}\n  </button>\n);\n",
        ),
        ("src/util.js", "// TODO(alice) second\nmodule.exports = {};\n"),
    ])
}

/// A project with `count` unassigned TODOs in one file
pub fn fixture_with_many_todos(count: usize) -> Result<McpTestFixture> {
    let mut content = String::new();
    for i in 0..count {
        content.push_str(&format!("// TODO item {}\nexport const v{} = {};\n", i, i, i));
    }
    McpTestFixture::with_files(&[("src/many.ts", &content)])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract the text of a successful CallToolResult
///
/// Panics if the result indicates an error
pub fn extract_tool_result_text(result: &rmcp::model::CallToolResult) -> String {
    // Check for errors using is_error field
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    text_content.text.clone()
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    serde_json::from_str(&extract_tool_result_text(result))
        .expect("Tool result should be valid JSON")
}

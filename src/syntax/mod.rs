//! Component file structure: locating the script blocks of a `.svelte` file.
//!
//! ```text
//! <script module> … </script>   → ScriptBlock { is_module: true, … }
//! <script lang="ts"> … </script> → ScriptBlock { lang: Some("ts"), … }
//! markup                         → ignored
//! ```

pub mod script;

pub use script::{ScriptBlock, extract_script_blocks};

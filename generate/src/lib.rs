#![deny(missing_docs, unsafe_code)]

//! Crate for generating the frontend's `deployments.ts` module from the
//! contract project's deployment configuration. This crate is intended to be
//! used from the `contract-sync` binary, but it works from a build script
//! just as well.

pub mod literal;

mod generate;

pub use crate::generate::flatten_token_addresses;

use anyhow::Result;
use serde_json::Value;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Builder for generating the TypeScript deployments module. Note that no
/// text is generated until the builder is finalized with `generate`.
pub struct ModuleBuilder {
    /// Name of the exported constant holding the deployment data.
    pub const_name: String,

    /// Whether to emit the typed accessor boilerplate after the data
    /// constant.
    pub helpers: bool,

    /// Override for the generation timestamp written into the file header.
    /// Defaults to the current UTC time; fixing it makes output
    /// deterministic.
    pub generated_at: Option<String>,
}

impl ModuleBuilder {
    /// Creates a new module builder with default settings.
    pub fn new() -> Self {
        ModuleBuilder {
            const_name: "contractsData".to_string(),
            helpers: true,
            generated_at: None,
        }
    }

    /// Sets the name of the exported data constant.
    pub fn const_name(mut self, name: impl Into<String>) -> Self {
        self.const_name = name.into();
        self
    }

    /// Specifies whether to emit the typed accessor boilerplate.
    pub fn helpers(mut self, helpers: bool) -> Self {
        self.helpers = helpers;
        self
    }

    /// Fixes the generation timestamp written into the file header.
    pub fn generated_at(mut self, timestamp: impl Into<String>) -> Self {
        self.generated_at = Some(timestamp.into());
        self
    }

    /// Generates the module text from a loaded deployment document.
    ///
    /// The document is normalized first (legacy token entries flattened to
    /// bare address strings); the input value itself is left untouched.
    pub fn generate(self, document: &Value) -> Result<TypeScriptModule> {
        Ok(TypeScriptModule {
            text: generate::expand(document, &self)?,
        })
    }
}

impl Default for ModuleBuilder {
    fn default() -> Self {
        ModuleBuilder::new()
    }
}

/// A generated TypeScript module. This type can be written to a file or
/// examined as text.
pub struct TypeScriptModule {
    text: String,
}

impl TypeScriptModule {
    /// The generated module text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Writes the module to a given `Write`.
    pub fn write(&self, mut w: impl Write) -> Result<()> {
        w.write_all(self.text.as_bytes())?;
        Ok(())
    }

    /// Writes the module to the specified file, creating the parent
    /// directory first if it does not exist.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write(writer)
    }
}

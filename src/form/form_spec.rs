use serde::{Deserialize, Serialize};

use crate::form::error::FormError;

/// Field layout of one data-entry form. Deserialized from YAML so the field
/// lists live next to the templates instead of being hard-coded per page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormSpec {
    /// Form name, matching the record kind ("core", "core_chip", ...)
    pub name: String,

    /// Ordered field names; order drives resolution and population order
    pub fields: Vec<String>,
}

/// Load form specs from a single YAML file or a directory of YAML files.
/// Directory loads are sorted by form name for deterministic order.
pub fn load_form_specs(path: &str) -> Result<Vec<FormSpec>, FormError> {
    let metadata = std::fs::metadata(path).map_err(|e| FormError::SpecRead {
        path: path.to_string(),
        source: e,
    })?;

    if metadata.is_dir() {
        let mut specs = Vec::new();
        let entries = std::fs::read_dir(path).map_err(|e| FormError::SpecRead {
            path: path.to_string(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| FormError::SpecRead {
                path: path.to_string(),
                source: e,
            })?;
            let p = entry.path();
            if p.extension().map_or(false, |e| e == "yaml" || e == "yml") {
                specs.push(load_one(&p.display().to_string())?);
            }
        }

        specs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(specs)
    } else {
        Ok(vec![load_one(path)?])
    }
}

/// Find a form spec by name.
pub fn find_spec<'a>(specs: &'a [FormSpec], name: &str) -> Result<&'a FormSpec, FormError> {
    specs
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| FormError::SpecNotFound {
            name: name.to_string(),
        })
}

fn load_one(path: &str) -> Result<FormSpec, FormError> {
    let content = std::fs::read_to_string(path).map_err(|e| FormError::SpecRead {
        path: path.to_string(),
        source: e,
    })?;

    serde_yaml::from_str(&content).map_err(|e| FormError::SpecParse {
        path: path.to_string(),
        source: e,
    })
}

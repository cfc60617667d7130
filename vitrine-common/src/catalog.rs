//! Content catalog: the immutable copy text driving the showcase.
//!
//! The catalog is configuration data, not modeled state. It is embedded as a
//! JSON document by the front end and deserialized once at startup; the core
//! never hardcodes presentation copy.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{Error, Platform, Result, ToastLevel};

/// Product entry shown in the Android mockup
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub tagline: String,
}

/// Marketing feature card
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: String,
    pub title: String,
    pub blurb: String,
}

/// One layer of the technology stack diagram
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TechLayer {
    pub layer: String,
    pub items: Vec<String>,
}

/// One delayed toast in a canned action script
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ToastStep {
    /// Delay before this step fires, relative to the previous step
    pub delay_ms: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// The full copy-text catalog
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    /// Screen names per platform mockup
    pub screens: BTreeMap<Platform, Vec<String>>,
    /// Feature label -> detail sentence for the iOS mockup taps
    pub features: BTreeMap<String, String>,
    pub products: Vec<Product>,
    pub cards: Vec<FeatureCard>,
    pub tech: Vec<TechLayer>,
    /// Action id -> toast script for the download-section buttons
    pub actions: BTreeMap<String, Vec<ToastStep>>,
}

impl Catalog {
    /// Parses and validates a catalog document
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every platform must have a screen inventory
    pub fn validate(&self) -> Result<()> {
        for platform in Platform::ALL {
            match self.screens.get(&platform) {
                Some(screens) if !screens.is_empty() => {}
                _ => return Err(Error::MissingScreens(platform)),
            }
        }
        Ok(())
    }

    pub fn screens(&self, platform: Platform) -> &[String] {
        self.screens
            .get(&platform)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Detail sentence for a feature label; `None` lets the caller fall back
    /// to a generic sentence
    pub fn feature_detail(&self, label: &str) -> Option<&str> {
        self.features.get(label).map(String::as_str)
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn action(&self, id: &str) -> Option<&[ToastStep]> {
        self.actions.get(id).map(Vec::as_slice)
    }
}

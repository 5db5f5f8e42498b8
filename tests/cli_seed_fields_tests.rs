//! End-to-end tests for `admin-colors seed` and `admin-colors fields`.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::process::Command;

mod fixtures;

use fixtures::*;

#[test]
fn test_seed_emits_default_colors() {
    let (config_path, config_temp) = temp_config("admin-bar-menu", &[]);

    let output = Command::new(admin_colors_bin())
        .args(["seed", "--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let seed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let defaults = seed.get("defaultColors").unwrap().as_object().unwrap();

    assert_eq!(defaults.len(), 9);
    assert_eq!(defaults.get("admin-bar-text").unwrap(), "#eeeeee");
    assert_eq!(defaults.get("menu-current-background").unwrap(), "#191e23");
}

#[test]
fn test_seed_ignores_stored_values() {
    // The picker seed carries factory defaults only; stored overrides
    // travel through the form fields.
    let (config_path, config_temp) =
        temp_config("admin-bar-menu", &[("admin-bar-text", "#123456")]);

    let output = Command::new(admin_colors_bin())
        .args(["seed", "--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let seed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let defaults = seed.get("defaultColors").unwrap().as_object().unwrap();
    assert_eq!(defaults.get("admin-bar-text").unwrap(), "#eeeeee");
}

#[test]
fn test_seed_menu_variant_subset() {
    let (config_path, config_temp) = temp_config("menu", &[]);

    let output = Command::new(admin_colors_bin())
        .args(["seed", "--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    let seed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let defaults = seed.get("defaultColors").unwrap().as_object().unwrap();
    assert_eq!(defaults.len(), 4);
    assert!(defaults.get("admin-bar-background").is_none());
}

#[test]
fn test_fields_describe_form_inputs() {
    let (config_path, config_temp) = temp_config(
        "admin-bar-menu",
        &[("menu-hover-background", "#0099cc"), ("menu-text", "")],
    );

    let output = Command::new(admin_colors_bin())
        .args(["fields", "--config", config_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let fields: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let fields = fields.as_array().unwrap();
    assert_eq!(fields.len(), 9);

    let hover = fields
        .iter()
        .find(|field| field.get("key").unwrap() == "menu-hover-background")
        .unwrap();
    assert_eq!(hover.get("value").unwrap(), "#0099cc");
    assert_eq!(hover.get("default").unwrap(), "#0073aa");
    assert_eq!(
        hover.get("label").unwrap(),
        "Menu Item Hover Background Color"
    );

    let text = fields
        .iter()
        .find(|field| field.get("key").unwrap() == "menu-text")
        .unwrap();
    assert_eq!(text.get("value").unwrap(), "");
}

#[test]
fn test_fields_variant_override() {
    let (config_path, config_temp) = temp_config("admin-bar-menu", &[]);

    let output = Command::new(admin_colors_bin())
        .args([
            "fields",
            "--variant",
            "menu",
            "--config",
            config_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let fields: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(fields.as_array().unwrap().len(), 4);
}

//! Integration tests for running an external patch tool.
//!
//! The tool image is a shell script, so these only run on unix. Everything runs in a single
//! test: executing a freshly written file while another thread forks can fail with `ETXTBSY`.

#![cfg(unix)]

use dotstamp::prelude::*;
use std::{fs, path::Path, time::Duration};

/// A tool that logs its arguments, one call per line, and appends `X` to its target
fn recording_tool(log: &Path) -> Vec<u8> {
    format!(
        "#!/bin/sh\nprintf '%s|' \"$@\" >> '{}'\necho >> '{}'\nprintf X >> \"$1\"\n",
        log.display(),
        log.display()
    )
    .into_bytes()
}

fn run_image_through_tool(dir: &Path) -> Result<()> {
    let log = dir.join("calls.log");
    let info = VersionResourceInformation {
        original_filename: Some("Renamed.dll".to_string()),
        product_name: Some("Contoso Product".to_string()),
        ..Default::default()
    };

    let patched = apply_resource_information(
        ResourceTarget::Image(b"MZ".to_vec()),
        &info,
        &recording_tool(&log),
        &ResourcePatchConfig::default(),
    )?;
    assert_eq!(patched, Some(b"MZXX".to_vec()));

    let calls = fs::read_to_string(&log)?;
    let calls: Vec<Vec<&str>> = calls
        .lines()
        .map(|line| line.trim_end_matches('|').split('|').collect())
        .collect();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0][1..], ["/s", "ProductName", "Contoso Product"]);
    assert_eq!(calls[1][1..], ["/s", "OriginalFilename", "Renamed.dll"]);

    // Both edits hit the same scratch copy of the image, removed afterwards
    assert_eq!(calls[0][0], calls[1][0]);
    assert!(!Path::new(calls[0][0]).exists());
    Ok(())
}

fn run_versions_through_tool(dir: &Path) -> Result<()> {
    let log = dir.join("versions.log");
    let tool = PatchTool::materialize(&recording_tool(&log))?;
    let program = tool.program().to_path_buf();
    assert!(program.exists());

    let info = VersionResourceInformation {
        file_version: Some("1.2.3.4".to_string()),
        product_version: Some("1.2".to_string()),
        ..Default::default()
    };
    let patched = ResourceEditor::new(&tool).apply(ResourceTarget::Image(Vec::new()), &info)?;
    assert_eq!(patched, Some(b"XX".to_vec()));

    let calls = fs::read_to_string(&log)?;
    let calls: Vec<&str> = calls.lines().collect();
    assert!(calls[0].ends_with("|1.2.3.4|"));
    assert!(calls[1].ends_with("|/pv|1.2|"));

    drop(tool);
    assert!(!program.exists());
    Ok(())
}

fn failing_exit_status_is_not_an_error(dir: &Path) -> Result<()> {
    let path = dir.join("exit.dll");
    fs::write(&path, b"MZ")?;

    let info = VersionResourceInformation {
        company_name: Some("Contoso".to_string()),
        ..Default::default()
    };
    let result = apply_resource_information(
        ResourceTarget::File(path.clone()),
        &info,
        b"#!/bin/sh\nexit 3\n",
        &ResourcePatchConfig::default(),
    )?;
    assert!(result.is_none());
    assert_eq!(fs::read(&path)?, b"MZ");
    Ok(())
}

fn hung_tool_times_out_atomically(dir: &Path) -> Result<()> {
    let target_dir = dir.join("atomic");
    fs::create_dir(&target_dir)?;
    let path = target_dir.join("hung.dll");
    fs::write(&path, b"MZ")?;

    let info = VersionResourceInformation {
        company_name: Some("Contoso".to_string()),
        product_name: Some("Contoso Product".to_string()),
        ..Default::default()
    };
    let config = ResourcePatchConfig {
        atomic: true,
        tool_timeout: Some(Duration::from_millis(200)),
    };

    let result = apply_resource_information(
        ResourceTarget::File(path.clone()),
        &info,
        b"#!/bin/sh\nexec sleep 10\n",
        &config,
    );
    assert!(matches!(result, Err(Error::ToolTimeout { .. })));

    // The original is untouched and the scratch copy is gone
    assert_eq!(fs::read(&path)?, b"MZ");
    assert_eq!(fs::read_dir(&target_dir)?.count(), 1);
    Ok(())
}

#[test]
fn test_patch_tool_processes() -> Result<()> {
    let dir = tempfile::tempdir()?;

    run_image_through_tool(dir.path())?;
    run_versions_through_tool(dir.path())?;
    failing_exit_status_is_not_an_error(dir.path())?;
    hung_tool_times_out_atomically(dir.path())?;
    Ok(())
}

//! Tests for a full codemod run over a synthetic directory tree.
#![allow(clippy::unwrap_used)]

use anyhow::Result;
use prismafix::commands::{run_migrate, MigrateOptions};
use prismafix::rules::{FixCategory, RuleSet, RuleTables};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// 3 enum-only, 2 types-only, 2 both, 2 untouched, plus non-matching files.
fn build_tree(root: &Path) -> Result<()> {
    write(root, "orders/route.ts", "status = OrderStatus.PAID;\n")?;
    write(root, "tickets/route.ts", "s = TicketStatus.SOLD;\n")?;
    write(
        root,
        "escrow/route.ts",
        "import { TicketEscrowState } from \"@prisma/client\";\n",
    )?;
    write(root, "forum/route.ts", "posts.map((p) => p.id);\n")?;
    write(root, "forum/[id]/route.ts", "xs.sort((a, b) => 0);\n")?;
    write(
        root,
        "payments/route.ts",
        "ps.filter((p) => p.status === PaymentStatus.SUCCEEDED);\n",
    )?;
    write(
        root,
        "admin/verify/route.ts",
        "await db.$transaction(async (tx) => TicketVerificationStatus.VERIFIED);\n",
    )?;
    write(root, "health/route.ts", "export const GET = () => ok();\n")?;
    write(root, "lib/util.ts", "export const id = (x: string) => x;\n")?;
    write(root, "forum/page.tsx", "OrderStatus.PAID; xs.map((x) => x);\n")?;
    write(root, "node_modules/dep/index.ts", "OrderStatus.PAID;\n")?;
    Ok(())
}

fn run(root: &Path, options: MigrateOptions) -> Result<(prismafix::commands::RunReport, String)> {
    colored::control::set_override(false);
    let rules = RuleSet::new(&RuleTables::default())?;
    let options = MigrateOptions {
        root: root.to_path_buf(),
        ..options
    };
    let mut out = Vec::new();
    let report = run_migrate(&rules, &options, &mut out)?;
    Ok((report, String::from_utf8(out)?))
}

#[test]
fn test_aggregate_counts_match_tree() -> Result<()> {
    let temp = TempDir::new()?;
    build_tree(temp.path())?;

    let (report, output) = run(temp.path(), MigrateOptions::default())?;

    assert_eq!(report.files_scanned, 9);
    assert_eq!(report.enum_files, 5);
    assert_eq!(report.type_files, 4);
    assert!(output.starts_with("Processing 9 files...\n\n"));
    assert!(output.contains("Total files with enum fixes: 5\n"));
    assert!(output.contains("Total files with type fixes: 4\n"));
    assert_eq!(output.matches("[ENUMS] Fixed: ").count(), 5);
    assert_eq!(output.matches("[TYPES] Fixed: ").count(), 4);
    Ok(())
}

#[test]
fn test_notices_are_interleaved_per_file() -> Result<()> {
    let temp = TempDir::new()?;
    build_tree(temp.path())?;

    let (_, output) = run(temp.path(), MigrateOptions::default())?;
    let lines: Vec<&str> = output
        .lines()
        .filter(|l| l.contains("Fixed: "))
        .collect();

    let payments = lines
        .iter()
        .position(|l| l.starts_with("[ENUMS]") && l.ends_with("payments/route.ts"))
        .unwrap();
    assert!(lines[payments + 1].starts_with("[TYPES]"));
    assert!(lines[payments + 1].ends_with("payments/route.ts"));
    Ok(())
}

#[test]
fn test_second_run_is_a_no_op() -> Result<()> {
    let temp = TempDir::new()?;
    build_tree(temp.path())?;

    run(temp.path(), MigrateOptions::default())?;
    let (report, _) = run(temp.path(), MigrateOptions::default())?;

    assert_eq!(report.enum_files, 0);
    assert_eq!(report.type_files, 0);
    Ok(())
}

#[test]
fn test_files_are_rewritten_in_place() -> Result<()> {
    let temp = TempDir::new()?;
    build_tree(temp.path())?;

    run(temp.path(), MigrateOptions::default())?;

    let root = temp.path();
    assert_eq!(
        fs::read_to_string(root.join("payments/route.ts"))?,
        "ps.filter((p: any) => p.status === \"SUCCEEDED\");\n"
    );
    assert_eq!(fs::read_to_string(root.join("escrow/route.ts"))?, "");
    assert_eq!(
        fs::read_to_string(root.join("forum/page.tsx"))?,
        "OrderStatus.PAID; xs.map((x) => x);\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("node_modules/dep/index.ts"))?,
        "OrderStatus.PAID;\n"
    );
    Ok(())
}

#[test]
fn test_dry_run_matches_real_counts() -> Result<()> {
    let temp = TempDir::new()?;
    build_tree(temp.path())?;
    let before = fs::read_to_string(temp.path().join("admin/verify/route.ts"))?;

    let dry = MigrateOptions {
        dry_run: true,
        ..MigrateOptions::default()
    };
    let (report, output) = run(temp.path(), dry)?;

    assert_eq!(report.enum_files, 5);
    assert_eq!(report.type_files, 4);
    assert!(output.starts_with("[DRY-RUN]"));
    assert_eq!(
        fs::read_to_string(temp.path().join("admin/verify/route.ts"))?,
        before
    );
    Ok(())
}

#[test]
fn test_only_enums() -> Result<()> {
    let temp = TempDir::new()?;
    build_tree(temp.path())?;

    let options = MigrateOptions {
        categories: vec![FixCategory::Enums],
        ..MigrateOptions::default()
    };
    let (report, output) = run(temp.path(), options)?;

    assert_eq!(report.enum_files, 5);
    assert_eq!(report.type_files, 0);
    assert!(!output.contains("[TYPES] Fixed"));
    Ok(())
}

#[test]
fn test_edit_counts_recorded() -> Result<()> {
    let temp = TempDir::new()?;
    write(
        temp.path(),
        "route.ts",
        "import { OrderStatus } from \"@prisma/client\";\n[OrderStatus.PAID, OrderStatus.PAID];\n",
    )?;

    let (report, _) = run(temp.path(), MigrateOptions::default())?;
    assert_eq!(report.fixes.len(), 1);
    assert_eq!(report.fixes[0].category, FixCategory::Enums);
    assert_eq!(report.fixes[0].edits, 3);
    Ok(())
}

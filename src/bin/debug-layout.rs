/// Diagnostic tool to verify items → split tree → constraint system → tiles
///
/// Usage:
///   debug-layout [--group N] [--sequential] [--emit-json] <width> [aspect[:priority] ...]
///   debug-layout [--group N] [--emit-json] --json items.json <width>
use anyhow::Context;
use ashlar_rs::layout::constraints::assemble_system;
use ashlar_rs::layout::{self, extent, Item, LayoutConfig, Tile};
use ashlar_rs::tree::{self, arena::SplitNode};
use serde::Serialize;
use std::fmt::Debug;
use std::path::PathBuf;

struct Args {
    width: f64,
    config: LayoutConfig,
    json_input: Option<PathBuf>,
    emit_json: bool,
    specs: Vec<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        width: 1200.0,
        config: LayoutConfig::default(),
        json_input: None,
        emit_json: false,
        specs: Vec::new(),
    };
    let mut width_seen = false;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--group" => {
                let n = it.next().context("--group needs a value")?;
                args.config.group_size = Some(n.parse().with_context(|| format!("bad group size '{}'", n))?);
            }
            "--json" => {
                args.json_input = Some(PathBuf::from(it.next().context("--json needs a path")?));
            }
            "--sequential" => args.config.parallel = false,
            "--emit-json" => args.emit_json = true,
            _ if !width_seen => {
                args.width = arg.parse().with_context(|| format!("bad width '{}'", arg))?;
                width_seen = true;
            }
            _ => args.specs.push(arg),
        }
    }
    Ok(args)
}

/// Parse `aspect` or `aspect:priority`.
fn parse_item(spec: &str, index: usize) -> anyhow::Result<Item<usize>> {
    let (aspect, priority) = match spec.split_once(':') {
        Some((a, p)) => (a, Some(p)),
        None => (spec, None),
    };
    let aspect: f64 = aspect.parse().with_context(|| format!("bad aspect in '{}'", spec))?;
    let mut item = Item::new(aspect, index);
    if let Some(p) = priority {
        item = item.with_priority(p.parse().with_context(|| format!("bad priority in '{}'", spec))?);
    }
    Ok(item)
}

fn sample_items() -> Vec<Item<usize>> {
    [0.75, 1.5, 0.5625, 1.0, 0.667, 1.333, 0.75]
        .iter()
        .enumerate()
        .map(|(i, &a)| Item::new(a, i).with_priority(if i == 3 { 2.0 } else { 1.0 }))
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ashlar_rs=debug".parse()?),
        )
        .init();

    let args = parse_args()?;

    if let Some(path) = &args.json_input {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let items: Vec<Item<serde_json::Value>> =
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        return run(&items, &args);
    }

    let items = if args.specs.is_empty() {
        sample_items()
    } else {
        args.specs
            .iter()
            .enumerate()
            .map(|(i, s)| parse_item(s, i))
            .collect::<anyhow::Result<Vec<_>>>()?
    };
    run(&items, &args)
}

fn run<H>(items: &[Item<H>], args: &Args) -> anyhow::Result<()>
where
    H: Clone + Send + Sync + Debug + Serialize,
{
    let tiles = layout::layout_all(items, args.width, &args.config)?;

    if args.emit_json {
        println!("{}", serde_json::to_string_pretty(&tiles)?);
        return Ok(());
    }

    println!("=== DIAGNOSTIC: Items → Tree → Tiles ===");
    println!("Width: {}  Items: {}  Group size: {:?}", args.width, items.len(), args.config.group_size);

    // Show the first group's tree and system
    let first = args.config.group_size.unwrap_or(items.len()).min(items.len());
    let group = &items[..first];
    let split = tree::build_tree(group)?;

    println!("\n[1] Split tree of first group: {} nodes, depth {}", split.node_count(), split.depth());
    let mut stack = vec![(split.root(), 0usize)];
    while let Some((id, depth)) = stack.pop() {
        match *split.get(id) {
            SplitNode::Leaf { item } => println!(
                "    {}leaf {} (aspect={:.3}, priority={:.2})",
                "  ".repeat(depth),
                item,
                group[item].aspect,
                group[item].priority
            ),
            SplitNode::Inner { orientation, left, right } => {
                println!("    {}{:?}", "  ".repeat(depth), orientation);
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
        }
    }

    let (a, b) = assemble_system(&split, group, args.width);
    println!("\n[2] Constraint system (A | b):");
    for r in 0..a.nrows() {
        let row: Vec<String> = a.row(r).iter().map(|v| format!("{:6.2}", v)).collect();
        println!("    [{}] | {}", row.join(" "), b[r]);
    }

    println!("\n[3] Tiles:");
    for (i, tile) in tiles.iter().enumerate() {
        println!(
            "    [{}] {}x{} at ({}, {}) - {:?}",
            i, tile.width, tile.height, tile.x, tile.y, tile.handle
        );
    }

    println!("\n[4] Checking for anomalies:");
    let bounds = extent(&tiles);
    let covered: u64 = tiles.iter().map(Tile::area).sum();
    let total = bounds.width as u64 * bounds.height as u64;
    println!("    Extent:   {}x{}", bounds.width, bounds.height);
    println!("    Coverage: {:.2}%", covered as f64 / total.max(1) as f64 * 100.0);

    let mut overlaps = 0;
    for (i, t) in tiles.iter().enumerate() {
        for u in &tiles[i + 1..] {
            if t.overlaps(u) {
                overlaps += 1;
            }
        }
    }
    println!("    Overlapping pairs: {}", overlaps);
    if (bounds.width as f64 - args.width).abs() > 1.0 {
        println!("    WARNING: extent width {} drifted from requested {}", bounds.width, args.width);
    }

    Ok(())
}

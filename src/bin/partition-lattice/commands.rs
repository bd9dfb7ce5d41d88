use anyhow::{bail, ensure, Context, Result};
use log::info;
use partition_lattice::lattice::LARGE_GROUND_SET;
use partition_lattice::partition::stirling2;
use partition_lattice::prelude::*;
use serde::Serialize;

use core::fmt::Write;

use crate::cli::parse_partition;

#[derive(Debug, Serialize)]
struct HasseDiagram<'a> {
    ground: &'a GroundSet<String>,
    partitions: &'a [Partition<String>],
    edges: Vec<CoverEdge>,
}

pub fn enumerate(ground: GroundSet<String>) -> Result<()> {
    print!("{}", render_enumerate(ground)?);
    Ok(())
}

pub fn hasse(ground: GroundSet<String>, json: bool) -> Result<()> {
    print!("{}", render_hasse(ground, json)?);
    Ok(())
}

pub fn join(left: &str, right: &str) -> Result<()> {
    print!("{}", render_join(left, right)?);
    Ok(())
}

pub fn effect(left: &str, right: &str, pair: &[String]) -> Result<()> {
    print!("{}", render_effect(left, right, pair)?);
    Ok(())
}

pub fn demo() -> Result<()> {
    print!("{}", render_demo()?);
    Ok(())
}

/// Numbered partitions with their rank, then the number of partitions of each rank.
fn render_enumerate(ground: GroundSet<String>) -> Result<String> {
    let lattice = PartitionLattice::new(ground);
    let n = lattice.ground().len();
    ensure!(
        lattice.len() == bell_number::<usize>(n),
        "enumeration produced {} partitions, expected B({n})",
        lattice.len()
    );

    let mut out = String::new();
    writeln!(out, "{} partitions of {}", lattice.len(), lattice.ground())?;
    for (i, p) in lattice.partitions().iter().enumerate() {
        writeln!(out, "{i:>5}  rank {}  {p}", p.rank())?;
    }

    writeln!(out)?;
    writeln!(out, " rank  blocks  partitions  S(n, k)")?;
    for (rank, count) in lattice.rank_sizes().iter().enumerate() {
        let blocks = n - rank;
        let expected = stirling2::<usize>(n, blocks);
        writeln!(out, "{rank:>5}  {blocks:>6}  {count:>10}  {expected:>7}")?;
    }
    Ok(out)
}

fn hasse_diagram(lattice: &PartitionLattice<String>) -> HasseDiagram<'_> {
    HasseDiagram {
        ground: lattice.ground(),
        partitions: lattice.partitions(),
        edges: lattice.cover_edges(),
    }
}

fn render_hasse(ground: GroundSet<String>, json: bool) -> Result<String> {
    let lattice = PartitionLattice::new(ground);
    let diagram = hasse_diagram(&lattice);
    if json {
        return Ok(serde_json::to_string_pretty(&diagram)? + "\n");
    }

    let mut out = String::new();
    for (i, p) in diagram.partitions.iter().enumerate() {
        writeln!(out, "{i:>5}  {p}")?;
    }
    writeln!(out)?;
    for edge in &diagram.edges {
        writeln!(out, "{:>5} ⋖ {}", edge.lower, edge.upper)?;
    }
    info!("{} partitions, {} cover edges", lattice.len(), diagram.edges.len());
    Ok(out)
}

fn render_join(left: &str, right: &str) -> Result<String> {
    let p = parse_partition(left)?;
    let q = parse_partition(right)?;
    let ground = p.ground();

    let pq = partition_lattice::partition::join(&p, &q, &ground)
        .context("cannot join partitions")?;
    let pm = partition_lattice::partition::meet(&p, &q, &ground)?;

    let mut out = String::new();
    writeln!(out, "P     = {p}")?;
    writeln!(out, "Q     = {q}")?;
    writeln!(out, "P ∨ Q = {pq}")?;
    writeln!(out, "P ∧ Q = {pm}")?;

    if ground.len() > LARGE_GROUND_SET {
        info!("skipping lattice checks for a {}-element set", ground.len());
        return Ok(out);
    }

    let lattice = PartitionLattice::new(ground);
    write_check(&mut out, "join", Side::Upper, &lattice.check_join(&p, &q)?)?;
    write_check(&mut out, "meet", Side::Lower, &lattice.check_meet(&p, &q)?)?;
    Ok(out)
}

fn render_effect(left: &str, right: &str, pair: &[String]) -> Result<String> {
    let [a, b] = pair else {
        bail!("expected exactly two elements for --pair");
    };
    let p = parse_partition(left)?;
    let q = parse_partition(right)?;
    let ground = p.ground();
    ensure!(
        ground.contains(a) && ground.contains(b),
        "{a} and {b} must both be elements of {ground}"
    );

    let phi = SameBlock::new(a.clone(), b.clone());
    let effect = generative_effect(&phi, &p, &q, &ground).context("cannot join partitions")?;

    let mut out = String::new();
    write_effect(&mut out, &format!("{a} ~ {b}"), &effect)?;
    Ok(out)
}

fn render_demo() -> Result<String> {
    let mut out = String::new();

    writeln!(out, "# Partitions of a two-element set")?;
    let two = PartitionLattice::new(GroundSet::new(["•", "∗"]));
    for (i, p) in two.partitions().iter().enumerate() {
        writeln!(out, "  {i}: {p}")?;
    }
    for edge in two.cover_edges() {
        let lower = &two.partitions()[edge.lower];
        let upper = &two.partitions()[edge.upper];
        writeln!(out, "  {lower} ⋖ {upper}")?;
    }

    writeln!(out)?;
    writeln!(out, "# Partitions of {{1, 2, 3, 4}}")?;
    let ground = GroundSet::new(1..=4u32);
    let four = PartitionLattice::new(ground.clone());
    writeln!(
        out,
        "  {} partitions, {} cover edges, rank sizes {:?}",
        four.len(),
        four.cover_edges().len(),
        four.rank_sizes()
    )?;

    writeln!(out)?;
    writeln!(out, "# Join")?;
    let p = Partition::new(&ground, vec![vec![1, 2], vec![3, 4]])?;
    let q = Partition::new(&ground, vec![vec![1, 3], vec![2, 4]])?;
    let check = four.check_join(&p, &q)?;
    writeln!(out, "  {p} ∨ {q} = {}", check.bound)?;
    write_check(&mut out, "join", Side::Upper, &check)?;
    for c in four.upper_bounds(&p, &q) {
        writeln!(out, "  upper bound: {c}")?;
    }

    writeln!(out)?;
    writeln!(out, "# Generative effect")?;
    let phi = SameBlock::new(1, 4);
    writeln!(out, "  Φ monotone on the lattice: {}", four.is_monotone(&phi))?;
    let effect = generative_effect(&phi, &p, &q, &ground)?;
    write_effect(&mut out, "1 ~ 4", &effect)?;
    Ok(out)
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Upper,
    Lower,
}

fn write_check<T>(out: &mut String, what: &str, side: Side, check: &BoundCheck<T>) -> Result<()> {
    let (position, bounds) = match side {
        Side::Upper => ("above", "upper bounds"),
        Side::Lower => ("below", "lower bounds"),
    };
    writeln!(
        out,
        "  {what} is a bound {position} both: {}; extremal among {} {bounds}: {}",
        check.is_bound, check.candidates, check.is_extremal
    )?;
    Ok(())
}

fn write_effect(out: &mut String, name: &str, effect: &GenerativeEffect<bool>) -> Result<()> {
    writeln!(out, "  Φ(P)        = {}", effect.left)?;
    writeln!(out, "  Φ(Q)        = {}", effect.right)?;
    writeln!(out, "  Φ(P ∨ Q)    = {}", effect.joined)?;
    let strict = if effect.is_generative() {
        ", strict: generative effect"
    } else {
        ""
    };
    writeln!(
        out,
        "  Φ(P) ∨ Φ(Q) ≤ Φ(P ∨ Q): {} ({name}{strict})",
        effect.holds()
    )?;
    Ok(())
}

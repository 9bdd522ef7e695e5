//! Graphviz DOT source for a cup bracket.

use crate::models::{League, Round, Side};
use crate::view::{BracketView, MatchView};
use std::fmt::{self, Write};

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Edge attributes: red and thick for the side that advanced.
fn edge(m: Option<&MatchView>, side: Side) -> &'static str {
    if m.and_then(|m| m.winner_side) == Some(side) {
        "color=\"red\", penwidth=2.5"
    } else {
        "color=\"black\", penwidth=1"
    }
}

fn slot_label(m: Option<&MatchView>, side: Side) -> String {
    let label = m.map(|m| match side {
        Side::Left => m.left_label.as_str(),
        Side::Right => m.right_label.as_str(),
    });
    escape(label.unwrap_or(""))
}

/// Left-to-right bracket with a separate third-place cluster.
pub fn bracket_dot(view: &BracketView) -> String {
    let mut out = String::new();
    if let Err(e) = write_dot(&mut out, view) {
        log::error!("Could not render {} {} bracket: {}", view.league, view.cup, e);
    }
    out
}

fn write_dot(out: &mut String, view: &BracketView) -> fmt::Result {
    let background = match view.league {
        League::Regular => "#E6F3FF",
        League::Mixed => "#FFF0F5",
    };
    let sf1 = view.get(Round::Sf1);
    let sf2 = view.get(Round::Sf2);
    let fin = view.get(Round::Final);
    let third = view.get(Round::Third);
    let [s1, s2, s3, s4] = &view.seeds;

    writeln!(out, "digraph G {{")?;
    writeln!(out, "    rankdir=LR; bgcolor=\"{background}\";")?;
    writeln!(
        out,
        "    node [shape=box, style=\"filled,rounded\", fillcolor=\"white\", fontname=\"Sans-Serif\", fontsize=10];"
    )?;
    writeln!(out, "    edge [penwidth=1.5];")?;
    writeln!(out, "    subgraph cluster_main {{")?;
    writeln!(out, "        label=\"{} cup\"; style=invis;", view.cup)?;
    writeln!(
        out,
        "        node [fillcolor=\"#E6F3FF\"] T1 [label=\"1: {}\"]; T4 [label=\"4: {}\"]; T2 [label=\"2: {}\"]; T3 [label=\"3: {}\"];",
        escape(s1),
        escape(s4),
        escape(s2),
        escape(s3)
    )?;
    writeln!(
        out,
        "        node [fillcolor=\"#FFF0F5\"] F1 [label=\"{}\"]; F2 [label=\"{}\"];",
        slot_label(fin, Side::Left),
        slot_label(fin, Side::Right)
    )?;
    writeln!(
        out,
        "        node [fillcolor=\"#FFD700\"] WIN [label=\"{}\"];",
        escape(&view.champion)
    )?;
    writeln!(out, "        T1 -> F1 [{}];", edge(sf1, Side::Left))?;
    writeln!(out, "        T4 -> F1 [{}];", edge(sf1, Side::Right))?;
    writeln!(out, "        T2 -> F2 [{}];", edge(sf2, Side::Left))?;
    writeln!(out, "        T3 -> F2 [{}];", edge(sf2, Side::Right))?;
    writeln!(out, "        F1 -> WIN [{}];", edge(fin, Side::Left))?;
    writeln!(out, "        F2 -> WIN [{}];", edge(fin, Side::Right))?;
    writeln!(out, "    }}")?;
    writeln!(out, "    T3 -> L1 [style=invis, weight=10];")?;
    writeln!(out, "    subgraph cluster_3rd {{")?;
    writeln!(
        out,
        "        label=\"Third place\"; style=filled; color=\"{background}\";"
    )?;
    writeln!(
        out,
        "        node [fillcolor=\"#F0F8FF\"] L1 [label=\"{}\"]; L2 [label=\"{}\"];",
        slot_label(third, Side::Left),
        slot_label(third, Side::Right)
    )?;
    writeln!(
        out,
        "        node [fillcolor=\"#FFFACD\"] THIRD [label=\"{}\"];",
        escape(&view.third_place)
    )?;
    writeln!(out, "        L1 -> THIRD [{}];", edge(third, Side::Left))?;
    writeln!(out, "        L2 -> THIRD [{}];", edge(third, Side::Right))?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")
}

//! Round-by-round report of an assignment

use std::fmt::{self, Write};

use crate::assignment::Assignment;
use crate::error::LineupError;
use crate::template::Template;

/// Render the report into a new string
pub fn render_report(template: &Template, assignment: &Assignment) -> Result<String, LineupError> {
    let mut out = String::new();
    write_report(&mut out, template, assignment)?;
    Ok(out)
}

/// Write every round and court with the players occupying its seats.
///
/// Rounds and courts are numbered from 1. Each round is followed by a
/// blank line. Fails without writing anything if the assignment does not
/// fill the template's seats.
pub fn write_report<W: Write>(out: &mut W, template: &Template, assignment: &Assignment) -> Result<(), LineupError> {
    template.check_assignment(assignment)?;
    write_rounds(out, template, assignment)?;
    Ok(())
}

fn write_rounds<W: Write>(out: &mut W, template: &Template, assignment: &Assignment) -> fmt::Result {
    for (r, round) in template.rounds().iter().enumerate() {
        writeln!(out, "Round {}", r + 1)?;
        for (c, court) in round.courts().iter().enumerate() {
            let [p1, p2, p3, p4] = court.seats().map(|seat| &assignment[seat]);
            writeln!(
                out,
                "  Court {}: {} ({:.1}) / {} ({:.1}) – {} ({:.1}) / {} ({:.1})",
                c + 1,
                p1.name,
                p1.rating,
                p2.name,
                p2.rating,
                p3.name,
                p3.rating,
                p4.name,
                p4.rating
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

use thiserror::Error;

/// A scroll-anchored chronology event: an ordered page coordinate paired
/// with the year it stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: f64,
    pub year: i32,
}

impl Marker {
    pub fn new(position: f64, year: i32) -> Self {
        Self { position, year }
    }
}

/// Declared span of one era section on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraSpan {
    pub start_year: i32,
    pub end_year: i32,
}

/// Chronological range the readout pins to outside the marker run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraBounds {
    pub start_year: i32,
    pub end_year: i32,
}

#[derive(Debug, Error)]
pub enum ChronologyError {
    #[error("chronology has no markers to interpolate between")]
    NoMarkers,
}

/// Bounds for the year readout: the first era's opening year and the
/// last era's closing year. Pages that declare no eras fall back to the
/// outermost marker years. `markers` is expected in position order.
pub fn era_bounds(eras: &[EraSpan], markers: &[Marker]) -> Result<EraBounds, ChronologyError> {
    let (first, last) = match (markers.first(), markers.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(ChronologyError::NoMarkers),
    };

    Ok(EraBounds {
        start_year: eras.first().map_or(first.year, |e| e.start_year),
        end_year: eras.last().map_or(last.year, |e| e.end_year),
    })
}

/// Interpolated year for a cursor coordinate against a run of markers.
///
/// Above the first marker the readout pins to the era's opening year.
/// Between markers it is a rounded linear blend. Past the last marker it
/// blends toward the closing year over that marker's own trailing extent
/// (`tail_extent`, the far edge of its on-page element) and pins there
/// beyond it. Markers are sorted by position here, so callers can hand
/// over measurements in document order.
pub fn interpolate_year(
    markers: &[Marker],
    tail_extent: f64,
    era: EraBounds,
    cursor: f64,
) -> Result<i32, ChronologyError> {
    if markers.is_empty() {
        return Err(ChronologyError::NoMarkers);
    }

    let mut run = markers.to_vec();
    // stable, so coincident positions keep their insertion order
    run.sort_by(|a, b| a.position.total_cmp(&b.position));

    let first = run[0];
    let last = run[run.len() - 1];

    if cursor <= first.position {
        return Ok(era.start_year);
    }

    if cursor <= last.position {
        for pair in run.windows(2) {
            if cursor >= pair[0].position && cursor <= pair[1].position {
                return Ok(blend(
                    pair[0].year,
                    pair[1].year,
                    cursor - pair[0].position,
                    pair[1].position - pair[0].position,
                ));
            }
        }
        // unreachable once the run is sorted; the clamp is the sane answer
        return Ok(last.year);
    }

    if cursor <= tail_extent {
        // The final stretch blends over the last marker's own extent
        // rather than toward a successor: the page reads the closing
        // year while the last card is still in view.
        return Ok(blend(
            last.year,
            era.end_year,
            cursor - last.position,
            tail_extent - last.position,
        ));
    }

    Ok(era.end_year)
}

/// Rounded linear blend. A zero-width span counts as one unit so
/// coincident markers yield one of the bounding years instead of NaN.
fn blend(from: i32, to: i32, offset: f64, span: f64) -> i32 {
    let span = if span == 0.0 { 1.0 } else { span };
    (from as f64 + offset / span * (to - from) as f64).round() as i32
}

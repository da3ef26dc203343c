use crate::infra::{parse_instant, parse_role};
use campus_events::catalog::{
    all_events, format_posted_time, my_events, opening_events, parse_activities,
    parse_applications, CatalogError, Clock, Event, EventFilter, FixedClock, OrganizerProfileId,
    SystemClock, UserRole,
};
use campus_events::error::AppError;
use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum EventView {
    /// Personal dashboard for the viewer
    Mine,
    /// Browsable listing
    #[default]
    All,
    /// Open or upcoming activities, soonest first
    Opening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct EventsArgs {
    /// Activities export: bare array, paginated page, or API envelope
    #[arg(long)]
    pub(crate) activities: PathBuf,
    /// Which listing to render
    #[arg(long, value_enum, default_value_t = EventView::All)]
    pub(crate) view: EventView,
    /// Viewer role (student, organizer, admin)
    #[arg(long, value_parser = parse_role)]
    pub(crate) role: Option<UserRole>,
    /// Treat the viewer as signed in
    #[arg(long)]
    pub(crate) authenticated: bool,
    /// The student's applications export
    #[arg(long)]
    pub(crate) applications: Option<PathBuf>,
    /// The organizer's profile id
    #[arg(long)]
    pub(crate) organizer_profile_id: Option<u64>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,
    /// Reference time for "posted" labels (defaults to now)
    #[arg(long, value_parser = parse_instant)]
    pub(crate) now: Option<DateTime<Utc>>,
}

pub(crate) fn run_events_report(args: EventsArgs) -> Result<(), AppError> {
    let EventsArgs {
        activities,
        view,
        role,
        authenticated,
        applications,
        organizer_profile_id,
        format,
        now,
    } = args;

    let activities = parse_activities(&std::fs::read_to_string(&activities)?)?;
    let applications = match applications {
        Some(path) => Some(parse_applications(&std::fs::read_to_string(path)?)?),
        None => None,
    };

    let filter = EventFilter {
        activities: &activities,
        role,
        is_authenticated: authenticated,
        applications: applications.as_deref(),
        organizer_profile_id: organizer_profile_id.map(OrganizerProfileId),
    };
    let events = select_events(view, &filter);
    debug!(?view, events = events.len(), "rendering event listing");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match now {
        Some(now) => render_events(&mut out, &events, format, &FixedClock(now)),
        None => render_events(&mut out, &events, format, &SystemClock),
    }
}

pub(crate) fn select_events(view: EventView, filter: &EventFilter<'_>) -> Vec<Event> {
    match view {
        EventView::Mine => my_events(filter),
        EventView::All => all_events(filter),
        EventView::Opening => opening_events(filter.activities),
    }
}

pub(crate) fn render_events<W: Write>(
    out: &mut W,
    events: &[Event],
    format: OutputFormat,
    clock: &dyn Clock,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => render_table(out, events, clock)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, events).map_err(CatalogError::from)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => render_csv(out, events, clock)?,
    }
    Ok(())
}

fn render_table<W: Write>(out: &mut W, events: &[Event], clock: &dyn Clock) -> io::Result<()> {
    if events.is_empty() {
        writeln!(out, "No activities available at the moment.")?;
        return Ok(());
    }

    writeln!(out, "{} event(s)", events.len())?;
    for event in events {
        let posted = format_posted_time(event.posted_at.as_deref(), clock);
        writeln!(
            out,
            "- #{} {} [{}] {}",
            event.id,
            event.title,
            event.status.label(),
            event.date_range
        )?;
        writeln!(
            out,
            "  {} | {}/{} participants{}",
            event.organizer,
            event.participants_count,
            event.max_participants,
            if posted.is_empty() {
                String::new()
            } else {
                format!(" | posted {posted}")
            }
        )?;
    }
    Ok(())
}

fn render_csv<W: Write>(out: &mut W, events: &[Event], clock: &dyn Clock) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record([
        "id",
        "title",
        "status",
        "date_range",
        "location",
        "organizer",
        "participants",
        "max_participants",
        "categories",
        "posted",
    ])?;

    for event in events {
        writer.write_record([
            event.id.to_string(),
            event.title.clone(),
            event.status.label().to_string(),
            event.date_range.clone(),
            event.location.clone(),
            event.organizer.clone(),
            event.participants_count.to_string(),
            event.max_participants.to_string(),
            event.category.join("; "),
            format_posted_time(event.posted_at.as_deref(), clock),
        ])?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_events::catalog::{transform, Activity, ActivityId, ActivityStatus};
    use chrono::TimeZone;

    fn events() -> Vec<Event> {
        let activity = Activity {
            id: Some(ActivityId(7)),
            title: Some("Campus Cleanup".to_string()),
            organizer_name: Some("Green Club".to_string()),
            start_at: Some("2025-11-13T09:00:00Z".to_string()),
            end_at: Some("2025-11-13T12:00:00Z".to_string()),
            created_at: Some("2025-11-10T07:00:00Z".to_string()),
            categories: Some(vec!["Social Engagement Activities".to_string()]),
            status: Some(ActivityStatus::Open),
            ..Activity::default()
        };
        vec![transform(Some(&activity))]
    }

    fn clock() -> FixedClock {
        FixedClock(
            Utc.with_ymd_and_hms(2025, 11, 10, 12, 0, 0)
                .single()
                .expect("valid instant"),
        )
    }

    fn render(format: OutputFormat, events: &[Event]) -> String {
        let mut buffer = Vec::new();
        render_events(&mut buffer, events, format, &clock()).expect("renders");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn table_includes_posted_label() {
        let output = render(OutputFormat::Table, &events());
        assert!(output.contains("#7 Campus Cleanup [open] 13/11/2025 - 13/11/2025"));
        assert!(output.contains("posted 5h ago"));
    }

    #[test]
    fn empty_table_prints_placeholder() {
        let output = render(OutputFormat::Table, &[]);
        assert_eq!(output.trim(), "No activities available at the moment.");
    }

    #[test]
    fn csv_has_header_and_row() {
        let output = render(OutputFormat::Csv, &events());
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("id,title,status,date_range,location,organizer,participants,max_participants,categories,posted")
        );
        let row = lines.next().expect("data row");
        assert!(row.starts_with("7,Campus Cleanup,open,13/11/2025 - 13/11/2025,,Green Club,0,0,"));
        assert!(row.ends_with("5h ago"));
    }

    #[test]
    fn json_serializes_event_views() {
        let output = render(OutputFormat::Json, &events());
        let payload: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(payload[0]["id"], serde_json::json!(7));
        assert_eq!(payload[0]["img_src"], serde_json::json!("/default-event.jpg"));
    }

    #[test]
    fn select_events_dispatches_by_view() {
        let activities = vec![
            Activity {
                id: Some(ActivityId(1)),
                status: Some(ActivityStatus::Pending),
                ..Activity::default()
            },
            Activity {
                id: Some(ActivityId(2)),
                status: Some(ActivityStatus::Open),
                ..Activity::default()
            },
        ];
        let filter = EventFilter::new(&activities).authenticated_as(UserRole::Admin);

        assert_eq!(select_events(EventView::All, &filter).len(), 2);
        assert_eq!(select_events(EventView::Opening, &filter).len(), 1);
        assert!(select_events(EventView::Mine, &filter).is_empty());
    }
}

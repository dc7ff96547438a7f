use folio_lib::editor::{ActivitySeries, Editor};
use iced::{
    Color, Element, Length, Point, Rectangle, Renderer, Theme, mouse,
    widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
};

use crate::components::profile_tab::Message;

// The site's chart styling: rgb(235, 116, 59) at full and 20% alpha.
const LINE: Color = Color {
    r: 235.0 / 255.0,
    g: 116.0 / 255.0,
    b: 59.0 / 255.0,
    a: 1.0,
};
const FILL: Color = Color { a: 0.2, ..LINE };

const MARGIN: f32 = 32.0;

/// The revisions-per-month line chart, or nothing at all for an editor
/// with no revisions (an empty chart would just mislead).
pub fn view<'a>(editor: &'a Editor, cache: &'a canvas::Cache) -> Option<Element<'a, Message>> {
    if editor.total_revisions == 0 {
        return None;
    }

    Some(
        Canvas::new(ActivityGraph {
            series: &editor.activity_data,
            cache,
        })
        .width(Length::Fill)
        .height(240)
        .into(),
    )
}

struct ActivityGraph<'a> {
    series: &'a ActivitySeries,
    cache: &'a canvas::Cache,
}

impl canvas::Program<Message> for ActivityGraph<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let chart = self.cache.draw(renderer, bounds.size(), |frame| {
            draw_chart(frame, self.series, theme);
        });

        vec![chart]
    }
}

#[allow(clippy::cast_precision_loss)] // chart coordinates
fn draw_chart(frame: &mut Frame, series: &ActivitySeries, theme: &Theme) {
    let palette = theme.extended_palette();

    let width = frame.width() - MARGIN * 2.0;
    let height = frame.height() - MARGIN * 2.0;
    if width <= 0.0 || height <= 0.0 || series.is_empty() {
        return;
    }

    let counts = series.counts();
    let max = series.max_count().max(1) as f32;
    let step = if counts.len() > 1 {
        width / (counts.len() - 1) as f32
    } else {
        0.0
    };
    let point = |i: usize, count: u64| {
        Point::new(
            MARGIN + step * i as f32,
            MARGIN + height * (1.0 - count as f32 / max),
        )
    };

    // Filled area under the line
    let area = Path::new(|builder| {
        builder.move_to(Point::new(MARGIN, MARGIN + height));
        for (i, count) in counts.iter().enumerate() {
            builder.line_to(point(i, *count));
        }
        builder.line_to(Point::new(MARGIN + width, MARGIN + height));
        builder.close();
    });
    frame.fill(&area, FILL);

    // The line itself
    let line = Path::new(|builder| {
        for (i, count) in counts.iter().enumerate() {
            if i == 0 {
                builder.move_to(point(i, *count));
            } else {
                builder.line_to(point(i, *count));
            }
        }
    });
    frame.stroke(&line, Stroke::default().with_color(LINE).with_width(1.0));

    // Axes
    let axes = Path::new(|builder| {
        builder.move_to(Point::new(MARGIN, MARGIN));
        builder.line_to(Point::new(MARGIN, MARGIN + height));
        builder.line_to(Point::new(MARGIN + width, MARGIN + height));
    });
    frame.stroke(
        &axes,
        Stroke::default()
            .with_color(palette.background.strong.color)
            .with_width(1.0),
    );

    // Dataset label
    frame.fill_text(canvas::Text {
        content: "Revisions".to_owned(),
        position: Point::new(MARGIN, 8.0),
        color: LINE,
        size: 14.0.into(),
        ..canvas::Text::default()
    });

    // First and last period labels keep the x axis readable without
    // crowding a label under every point
    let labels = series.labels();
    if let Some(first) = labels.first() {
        frame.fill_text(canvas::Text {
            content: (*first).to_owned(),
            position: Point::new(MARGIN, MARGIN + height + 6.0),
            color: palette.background.base.text,
            size: 12.0.into(),
            ..canvas::Text::default()
        });
    }
    if labels.len() > 1
        && let Some(last) = labels.last()
    {
        frame.fill_text(canvas::Text {
            content: (*last).to_owned(),
            position: Point::new(MARGIN + width * 0.85, MARGIN + height + 6.0),
            color: palette.background.base.text,
            size: 12.0.into(),
            ..canvas::Text::default()
        });
    }
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;
    use folio_lib::editor::EditorType;

    use super::*;

    fn editor(total_revisions: u64) -> Editor {
        Editor {
            id: 17,
            name: "Alice".to_owned(),
            bio: String::new(),
            area: None,
            gender: None,
            title_unlock_id: None,
            editor_type: EditorType {
                id: 1,
                label: "Editor".to_owned(),
            },
            total_revisions,
            revisions_applied: total_revisions,
            revisions_reverted: 0,
            created_at: chrono::Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            active_at: chrono::Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap(),
            metabrainz_user_id: None,
            cached_metabrainz_name: None,
            activity_data: [("2021-01".to_owned(), 3), ("2021-02".to_owned(), 5)]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn test_no_chart_without_revisions() {
        let cache = canvas::Cache::new();

        assert!(view(&editor(0), &cache).is_none());
    }

    #[test]
    fn test_chart_present_with_revisions() {
        let cache = canvas::Cache::new();

        assert!(view(&editor(8), &cache).is_some());
    }
}

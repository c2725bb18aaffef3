//! HTML fragments for the project grid

use super::data::ProjectRecord;

/// Build the markup for one project card.
pub fn project_card(record: &ProjectRecord) -> String {
    let tech = record
        .tech
        .iter()
        .map(|t| format!(r##"<span data-lang="{t}">#{t}</span>"##))
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r##"<article class="project-card reveal active" style="animation: fadeIn 0.6s ease;">
    <div class="card-visual">
        <img src="{image}" alt="{title}">
        <div class="card-overlay">
            <svg viewBox="0 0 24 24"><path d="M12 4l-1.41 1.41L16.17 11H4v2h12.17l-5.58 5.59L12 20l8-8z"></path></svg>
        </div>
    </div>
    <div class="card-content">
        <h3>{title}</h3>
        <p style="color:var(--accent-primary); font-size:0.8rem; margin-bottom:5px;">{kind}</p>
        <div class="tech-stack">
            {tech}
        </div>
    </div>
</article>
"##,
        image = record.image,
        title = record.title,
        kind = record.kind,
    )
}

/// Concatenate cards for every record, in order.
pub fn grid_markup<'a>(records: impl IntoIterator<Item = &'a ProjectRecord>) -> String {
    records.into_iter().map(project_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::data::{filter_records, load_projects, Category, Filter};

    #[test]
    fn test_card_carries_record_fields() {
        let records = load_projects();
        let card = project_card(&records[0]);

        assert!(card.contains(r#"class="project-card reveal active""#));
        assert!(card.contains("<h3>Stock Price Prediction LSTM</h3>"));
        assert!(card.contains("Deep Learning Model"));
        assert!(card.contains(r#"alt="Stock Price Prediction LSTM""#));
        assert!(card.contains(r##"<span data-lang="Python">#Python</span>"##));
        assert!(card.contains(r##"<span data-lang="Keras">#Keras</span>"##));
    }

    #[test]
    fn test_tech_spans_joined_with_space() {
        let records = load_projects();
        let card = project_card(&records[1]);
        assert!(card.contains(r##"#SQL</span> <span data-lang="PostgreSQL""##));
    }

    #[test]
    fn test_grid_markup_matches_filter() {
        let records = load_projects();

        let all = grid_markup(filter_records(&records, Filter::All));
        assert_eq!(all.matches("<article").count(), 4);

        let models = grid_markup(filter_records(&records, Filter::Category(Category::Model)));
        assert_eq!(models.matches("<article").count(), 1);
        assert!(models.contains("Stock Price Prediction LSTM"));
        assert!(!models.contains("E-Commerce Sales Analysis"));
    }

    #[test]
    fn test_empty_selection_renders_nothing() {
        assert_eq!(grid_markup([]), "");
    }
}

//! Chart figures.
//!
//! Each chart is a Plotly figure (`data` + `layout`) built with
//! `serde_json::json!`, plus the sentence that interprets it.

use crate::error::ReportError;
use crate::interpret;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use userboard_core::{UserFrame, ValueCount};

/// The charts the dashboard knows how to draw, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartId {
    DomainBar,
    NameVsUsername,
    DomainPie,
    NameLength,
    CompanyBar,
    CityBar,
}

impl ChartId {
    pub const ALL: [ChartId; 6] = [
        ChartId::DomainBar,
        ChartId::NameVsUsername,
        ChartId::DomainPie,
        ChartId::NameLength,
        ChartId::CompanyBar,
        ChartId::CityBar,
    ];

    /// Stable identifier used in URLs, file names and config.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartId::DomainBar => "domain-bar",
            ChartId::NameVsUsername => "name-vs-username",
            ChartId::DomainPie => "domain-pie",
            ChartId::NameLength => "name-length",
            ChartId::CompanyBar => "company-bar",
            ChartId::CityBar => "city-bar",
        }
    }

    /// Section heading shown above the chart.
    pub fn heading(&self) -> &'static str {
        match self {
            ChartId::DomainBar => "Users per email domain",
            ChartId::NameVsUsername => "Name vs username",
            ChartId::DomainPie => "Domain distribution",
            ChartId::NameLength => "Name length",
            ChartId::CompanyBar => "Users per company",
            ChartId::CityBar => "Users per city",
        }
    }

    /// File name of the standalone export.
    pub fn export_file_name(&self) -> String {
        format!("{}.html", self.slug())
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ChartId {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let slug = s.strip_suffix(".html").unwrap_or(s);
        ChartId::ALL
            .into_iter()
            .find(|id| id.slug() == slug)
            .ok_or_else(|| ReportError::UnknownChart(s.to_string()))
    }
}

/// One rendered-ready chart.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub id: ChartId,
    pub heading: String,
    pub title: String,
    /// Plotly figure: `{"data": [...], "layout": {...}}`
    pub figure: Value,
    pub interpretation: String,
}

/// Build one chart from the frame.
pub fn build_chart(id: ChartId, frame: &UserFrame) -> Chart {
    let (title, figure, interpretation) = match id {
        ChartId::DomainBar => {
            let counts = frame.domain_counts();
            let title = "Users by email domain";
            (
                title,
                counted_bar(&counts, title, "Domain", true),
                interpret::domains(&counts, frame.len()),
            )
        }
        ChartId::NameVsUsername => {
            let title = "Name vs username (colour by domain)";
            (title, name_vs_username(frame, title), interpret::names(frame))
        }
        ChartId::DomainPie => {
            let counts = frame.domain_counts();
            let title = "Distribution of users by domain";
            (
                title,
                pie(&counts, title),
                interpret::domain_share(&counts, frame.len()),
            )
        }
        ChartId::NameLength => {
            let lengths = frame.name_lengths();
            let title = "Distribution of name lengths";
            (
                title,
                histogram(&lengths, title),
                interpret::name_lengths(&lengths),
            )
        }
        ChartId::CompanyBar => {
            let counts = frame.company_counts();
            let title = "Users by company";
            (
                title,
                counted_bar(&counts, title, "Company", false),
                interpret::companies(&counts, frame.len()),
            )
        }
        ChartId::CityBar => {
            let counts = frame.city_counts();
            let title = "Users by city";
            (
                title,
                counted_bar(&counts, title, "City", false),
                interpret::cities(&counts, frame.len()),
            )
        }
    };

    Chart {
        id,
        heading: id.heading().to_string(),
        title: title.to_string(),
        figure,
        interpretation,
    }
}

/// Build the given charts in order, skipping repeats.
pub fn build_charts(ids: &[ChartId], frame: &UserFrame) -> Vec<Chart> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(id) {
            seen.push(*id);
        }
    }
    seen.into_iter().map(|id| build_chart(id, frame)).collect()
}

fn layout(title: &str, x_title: &str, y_title: &str) -> Value {
    json!({
        "title": { "text": title },
        "xaxis": { "title": { "text": x_title } },
        "yaxis": { "title": { "text": y_title } },
        "margin": { "t": 60, "r": 20, "b": 80, "l": 60 },
    })
}

fn counted_bar(counts: &[ValueCount], title: &str, x_title: &str, colour_by_count: bool) -> Value {
    let x: Vec<&str> = counts.iter().map(|c| c.value.as_str()).collect();
    let y: Vec<usize> = counts.iter().map(|c| c.count).collect();

    let mut trace = json!({
        "type": "bar",
        "x": x,
        "y": y,
        "hovertemplate": format!("{}: %{{x}}<br>Users: %{{y}}<extra></extra>", x_title),
    });
    if colour_by_count {
        trace["marker"] = json!({
            "color": y,
            "colorscale": "Viridis",
            "showscale": true,
            "colorbar": { "title": { "text": "Users" } },
        });
    }

    json!({
        "data": [trace],
        "layout": layout(title, x_title, "Users"),
    })
}

fn name_vs_username(frame: &UserFrame, title: &str) -> Value {
    // One trace per domain, in frequency order, so the legend reads like the bar chart.
    let traces: Vec<Value> = frame
        .domain_counts()
        .iter()
        .map(|domain| {
            let members: Vec<_> = frame
                .rows()
                .iter()
                .filter(|r| r.domain == domain.value)
                .collect();

            json!({
                "type": "scatter",
                "mode": "markers",
                "name": domain.value,
                "x": members.iter().map(|r| r.row.username.as_str()).collect::<Vec<_>>(),
                "y": members.iter().map(|r| r.row.name.as_str()).collect::<Vec<_>>(),
                "customdata": members
                    .iter()
                    .map(|r| [r.row.email.as_str(), r.row.phone.as_str(), r.row.website.as_str()])
                    .collect::<Vec<_>>(),
                "hovertemplate": "<b>%{y}</b><br>username: %{x}<br>email: %{customdata[0]}\
                                  <br>phone: %{customdata[1]}<br>website: %{customdata[2]}\
                                  <extra>%{fullData.name}</extra>",
                "marker": { "size": 12 },
            })
        })
        .collect();

    let mut layout = layout(title, "Username", "Name");
    layout["legend"] = json!({ "title": { "text": "Domain" } });

    json!({ "data": traces, "layout": layout })
}

fn pie(counts: &[ValueCount], title: &str) -> Value {
    json!({
        "data": [{
            "type": "pie",
            "labels": counts.iter().map(|c| c.value.as_str()).collect::<Vec<_>>(),
            "values": counts.iter().map(|c| c.count).collect::<Vec<_>>(),
            "hovertemplate": "%{label}: %{value} users (%{percent})<extra></extra>",
        }],
        "layout": {
            "title": { "text": title },
            "margin": { "t": 60, "r": 20, "b": 20, "l": 20 },
        },
    })
}

fn histogram(lengths: &[usize], title: &str) -> Value {
    json!({
        "data": [{
            "type": "histogram",
            "x": lengths,
            "xbins": { "size": 1 },
            "hovertemplate": "%{x} characters: %{y} users<extra></extra>",
        }],
        "layout": layout(title, "Name length (characters)", "Users"),
    })
}

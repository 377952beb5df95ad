use super::chart::{plot_points, polyline, y_ticks, PADDING, VIEW_HEIGHT, VIEW_WIDTH};
use super::data::{Period, CHART_TITLE, SUMMARY_CARDS};
use crate::shared::components::stat_card::StatCard;
use leptos::prelude::*;
use thaw::*;

/// Главный экран: карточки сводки и график выручки
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let period = RwSignal::new(Period::default());

    view! {
        <div class="page dashboard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Dashboard"}</h1>
                </div>
            </div>

            <div class="dashboard__cards">
                {SUMMARY_CARDS
                    .into_iter()
                    .map(|(label, icon_name, value)| {
                        view! { <StatCard label=label icon_name=icon_name value=value /> }
                    })
                    .collect_view()}
            </div>

            <div class="dashboard__chart card">
                <div class="dashboard__chart-header">
                    <h2 class="dashboard__chart-title">{CHART_TITLE}</h2>
                    <div class="dashboard__chart-toggle">
                        {Period::ALL
                            .into_iter()
                            .map(|p| {
                                let appearance = Signal::derive(move || {
                                    if period.get() == p {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Secondary
                                    }
                                });
                                view! {
                                    <Button appearance=appearance on_click=move |_| period.set(p)>
                                        {p.label()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                {move || view! { <LineChart period=period.get() /> }}
            </div>
        </div>
    }
}

fn coord(v: f64) -> String {
    format!("{:.1}", v)
}

#[component]
fn LineChart(period: Period) -> impl IntoView {
    let data = period.dataset();
    let points = plot_points(data.values);
    let line = polyline(&points);
    let baseline = VIEW_HEIGHT - PADDING;

    let grid = y_ticks(data.values)
        .into_iter()
        .map(|(value, y)| {
            view! {
                <g class="chart__tick">
                    <line x1=coord(PADDING) y1=coord(y) x2=coord(VIEW_WIDTH - PADDING) y2=coord(y) class="chart__grid" />
                    <text x=coord(PADDING - 6.0) y=coord(y + 4.0) text-anchor="end">{format!("{}", value)}</text>
                </g>
            }
        })
        .collect_view();

    let labels = points
        .iter()
        .zip(data.labels.iter())
        .map(|((x, _), label)| {
            view! {
                <text x=coord(*x) y=coord(baseline + 18.0) text-anchor="middle" class="chart__label">{*label}</text>
            }
        })
        .collect_view();

    let dots = points
        .iter()
        .zip(data.values.iter())
        .map(|((x, y), value)| {
            view! {
                <circle cx=coord(*x) cy=coord(*y) r="4" class="chart__dot" data-value=value.to_string() />
            }
        })
        .collect_view();

    view! {
        <svg
            class="chart"
            viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
            preserveAspectRatio="xMidYMid meet"
            role="img"
            aria-label=CHART_TITLE
        >
            {grid}
            <polyline points=line fill="none" class="chart__line" stroke="currentColor" stroke-width="2" />
            {dots}
            {labels}
        </svg>
    }
}

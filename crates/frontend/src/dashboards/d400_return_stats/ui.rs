use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::stat_card::{format_metric, StatCard, StatTone};
use contracts::dashboards::d400_return_stats::{
    compute_stats, recent_activity, step_distribution, top_parties, ReturnStats,
};
use leptos::prelude::*;
use thaw::*;

/// Return statistics over the loaded data store
#[component]
pub fn ReturnStatsDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let stats = Memo::new(move |_| ctx.data.with(|d| compute_stats(&d.returns)));
    let buckets = Memo::new(move |_| ctx.data.with(|d| step_distribution(&d.returns)));
    let activity = Memo::new(move |_| ctx.data.with(|d| recent_activity(&d.returns)));
    let performers = Memo::new(move |_| ctx.data.with(|d| top_parties(&d.returns)));

    let stat = move |f: fn(&ReturnStats) -> String| Signal::derive(move || stats.with(f));

    view! {
        <div id="d400_return_stats--dashboard" class="page dashboard">
            <div class="header">
                <div>
                    <h2 class="header__title">"Analytics Dashboard"</h2>
                    <p class="header__subtitle">"Material return performance at a glance"</p>
                </div>
            </div>

            <div class="dashboard__cards">
                <StatCard
                    label="Total Returns"
                    icon_name="package"
                    value=stat(|s| s.total.to_string())
                    subtitle=Signal::derive(|| Some("Overall material returns".to_string()))
                />
                <StatCard
                    label="In Progress"
                    icon_name="clock"
                    tone=StatTone::Warning
                    value=stat(|s| s.pending.to_string())
                    subtitle=Signal::derive(|| Some("Awaiting completion".to_string()))
                />
                <StatCard
                    label="Completed"
                    icon_name="check-circle"
                    tone=StatTone::Success
                    value=stat(|s| s.completed.to_string())
                    subtitle=Signal::derive(move || {
                        Some(format!("{}% completion rate", format_metric(stats.with(|s| s.completion_rate))))
                    })
                />
                <StatCard
                    label="Delayed"
                    icon_name="alert-triangle"
                    tone=StatTone::Error
                    value=stat(|s| s.delayed.to_string())
                    subtitle=Signal::derive(move || {
                        Some(format!("{}d avg delay", format_metric(stats.with(|s| s.avg_delay))))
                    })
                />
            </div>

            <div class="dashboard__grid">
                <Card>
                    <h3 class="dashboard__section-title">"Workflow Distribution"</h3>
                    <p class="dashboard__section-subtitle">"Items across each workflow stage"</p>
                    <div class="bars">
                        {move || {
                            let total = stats.with(|s| s.total).max(1);
                            buckets.get().into_iter().map(|bucket| {
                                let width = format!("width: {}%;", bucket.count * 100 / total);
                                let bar_class = format!("bars__fill bars__fill--{}", bucket.step.css_modifier());
                                view! {
                                    <div class="bars__row">
                                        <span class="bars__label">{icon(bucket.step.icon_name())}{bucket.description}</span>
                                        <div class="bars__track">
                                            <div class=bar_class style=width></div>
                                        </div>
                                        <span class="bars__count">{bucket.count}</span>
                                    </div>
                                }
                            }).collect_view()
                        }}
                    </div>
                </Card>

                <Card>
                    <h3 class="dashboard__section-title">"Process Efficiency"</h3>
                    <p class="dashboard__section-subtitle">"Overall system performance score"</p>
                    <div class="efficiency">
                        <div class="efficiency__score">
                            {move || format!("{}%", format_metric(stats.with(|s| s.efficiency)))}
                        </div>
                        <div class="efficiency__label">"Efficiency Score"</div>
                    </div>
                    <dl class="metrics">
                        <div class="metrics__row">
                            <dt>"Completion rate"</dt>
                            <dd>{move || format!("{}%", format_metric(stats.with(|s| s.completion_rate)))}</dd>
                        </div>
                        <div class="metrics__row">
                            <dt>"Average delay"</dt>
                            <dd>{move || format!("{} days", format_metric(stats.with(|s| s.avg_delay)))}</dd>
                        </div>
                    </dl>
                </Card>

                <Card>
                    <h3 class="dashboard__section-title">{icon("award")}"Top Performers"</h3>
                    {move || {
                        let list = performers.get();
                        if list.is_empty() {
                            return view! { <p class="dashboard__empty">"No parties yet"</p> }.into_any();
                        }
                        list.into_iter().enumerate().map(|(rank, party)| view! {
                            <div class="performer">
                                <span class="performer__rank">{rank + 1}</span>
                                <div class="performer__body">
                                    <div class="performer__name">{party.name}</div>
                                    <div class="performer__meta">
                                        {format!(
                                            "{} returns · {}% completed · {}d avg delay",
                                            party.returns,
                                            format_metric(party.completion),
                                            format_metric(party.avg_delay),
                                        )}
                                    </div>
                                </div>
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                    {format!("{:.0}", party.score)}
                                </Badge>
                            </div>
                        }).collect_view().into_any()
                    }}
                </Card>

                <Card>
                    <h3 class="dashboard__section-title">{icon("activity")}"Recent Activity"</h3>
                    {move || {
                        let items = activity.get();
                        if items.is_empty() {
                            return view! { <p class="dashboard__empty">"No activity yet"</p> }.into_any();
                        }
                        items.into_iter().map(|item| {
                            let color = if item.completed { BadgeColor::Success } else { BadgeColor::Informative };
                            view! {
                                <div class="activity">
                                    <span class="activity__icon">{icon(item.step.icon_name())}</span>
                                    <div class="activity__body">
                                        <div class="activity__title">{format!("{} · {}", item.return_no, item.action)}</div>
                                        <div class="activity__meta">{item.party}</div>
                                    </div>
                                    <Badge appearance=BadgeAppearance::Tint color=color>
                                        {item.step.label()}
                                    </Badge>
                                </div>
                            }
                        }).collect_view().into_any()
                    }}
                </Card>
            </div>
        </div>
    }
}

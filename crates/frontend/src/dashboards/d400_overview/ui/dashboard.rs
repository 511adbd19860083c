use contracts::domain::a003_sync_log::aggregate::SyncSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_overview::api::{self, DeviceCounts};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::list_view::StatusTone;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_session;

/// Headline figures for tenants, devices and the last day of sync traffic.
/// Each figure is fetched on its own so one failing endpoint leaves the
/// other cards intact.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let session = use_session();
    let tenant_count = RwSignal::new(None::<usize>);
    let devices = RwSignal::new(None::<DeviceCounts>);
    let sync = RwSignal::new(None::<SyncSummary>);
    let errors = RwSignal::new(Vec::<String>::new());
    let (pending, set_pending) = signal(0usize);

    let report = move |what: &str, err: String| {
        log::warn!("overview: {} failed: {}", what, err);
        errors.update(|list| list.push(format!("{}: {}", what, err)));
    };

    let load = move || {
        errors.set(Vec::new());
        set_pending.set(3);

        let client = session.client();
        spawn_local(async move {
            match api::fetch_tenant_count(client).await {
                Ok(count) => tenant_count.set(Some(count)),
                Err(e) => {
                    tenant_count.set(None);
                    report("Tenants", e.to_string());
                }
            }
            set_pending.update(|n| *n = n.saturating_sub(1));
        });

        let client = session.client();
        spawn_local(async move {
            match api::fetch_device_counts(client).await {
                Ok(counts) => devices.set(Some(counts)),
                Err(e) => {
                    devices.set(None);
                    report("Devices", e.to_string());
                }
            }
            set_pending.update(|n| *n = n.saturating_sub(1));
        });

        let client = session.client();
        spawn_local(async move {
            match api::fetch_sync_summary(client).await {
                Ok(summary) => sync.set(Some(summary)),
                Err(e) => {
                    sync.set(None);
                    report("Sync logs", e.to_string());
                }
            }
            set_pending.update(|n| *n = n.saturating_sub(1));
        });
    };

    Effect::new(move |_| load());

    let device_total = Signal::derive(move || devices.get().map(|d| d.total));
    let device_split = Signal::derive(move || {
        devices
            .get()
            .map(|d| format!("{} online / {} offline", d.online, d.offline))
    });
    let device_tone = Signal::derive(move || match devices.get() {
        Some(d) if d.offline > 0 && d.online == 0 => Some(StatusTone::Error),
        Some(d) if d.offline > 0 => Some(StatusTone::Warning),
        Some(_) => Some(StatusTone::Success),
        None => None,
    });
    let syncs = Signal::derive(move || sync.get().map(|s| s.syncs_last_24h));
    let sync_records = Signal::derive(move || {
        sync.get()
            .map(|s| format!("{} records moved", s.records_last_24h))
    });
    let affected = Signal::derive(move || sync.get().map(|s| s.devices_last_24h));

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || pending.get() > 0)
                    >
                        {icon("refresh")}
                        {move || if pending.get() > 0 { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    let list = errors.get();
                    (!list.is_empty()).then(|| view! {
                        <div class="alert alert--error">
                            {list.into_iter().map(|e| view! { <div>{e}</div> }).collect_view()}
                        </div>
                    })
                }}

                <div class="stat-grid">
                    <StatCard label="Tenants" icon_name="tenants" value=tenant_count />
                    <StatCard
                        label="Devices"
                        icon_name="devices"
                        value=device_total
                        tone=device_tone
                        subtitle=device_split
                    />
                    <StatCard
                        label="Syncs, last 24 h"
                        icon_name="sync"
                        value=syncs
                        subtitle=sync_records
                    />
                    <StatCard label="Devices synced, last 24 h" icon_name="activity" value=affected />
                </div>
            </div>
        </PageFrame>
    }
}

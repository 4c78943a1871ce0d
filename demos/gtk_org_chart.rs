use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use orgchart_rs::api::{OrgChart, OrgChartConfig};
use orgchart_rs::core::{SAMPLE_CURRENT_USER_ID, Viewport, sample_organization};
use orgchart_rs::platform_gtk::GtkOrgChartAdapter;
use orgchart_rs::render::CairoRenderer;

const INITIAL_WIDTH: i32 = 1100;
const INITIAL_HEIGHT: i32 = 720;

fn main() {
    let _ = orgchart_rs::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.orgchart.demos.gtk_org_chart")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_chart() -> Result<OrgChart<CairoRenderer>, Box<dyn std::error::Error>> {
    let renderer = CairoRenderer::new(INITIAL_WIDTH, INITIAL_HEIGHT)?;
    let tree = sample_organization();
    let config = OrgChartConfig::new(Viewport::new(INITIAL_WIDTH as u32, INITIAL_HEIGHT as u32))
        .with_highlighted_id(SAMPLE_CURRENT_USER_ID);
    Ok(OrgChart::new(renderer, tree, config)?)
}

fn build_ui(app: &gtk::Application) {
    let chart = match build_chart() {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to initialize org chart: {err}");
            return;
        }
    };

    let adapter = Rc::new(GtkOrgChartAdapter::new(chart));

    let status_label = gtk::Label::new(Some("Click a card to see who it is."));
    status_label.set_xalign(0.0);
    adapter.set_notification_hook({
        let status_label = status_label.clone();
        move |notification| {
            status_label.set_text(&format!(
                "{}: {}",
                notification.title, notification.description
            ));
        }
    });

    let search_entry = gtk::SearchEntry::new();
    search_entry.set_placeholder_text(Some("Search people"));
    search_entry.connect_search_changed({
        let adapter = Rc::clone(&adapter);
        move |entry| {
            let term = entry.text().to_string();
            adapter.with_chart(|chart| chart.set_search_term(term));
        }
    });

    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    controls.append(&search_entry);

    let zoom_in = gtk::Button::with_label("Zoom In");
    zoom_in.connect_clicked({
        let adapter = Rc::clone(&adapter);
        move |_| {
            if let Err(err) = adapter.with_chart(|chart| chart.zoom_in()) {
                eprintln!("zoom in failed: {err}");
            }
        }
    });
    controls.append(&zoom_in);

    let zoom_out = gtk::Button::with_label("Zoom Out");
    zoom_out.connect_clicked({
        let adapter = Rc::clone(&adapter);
        move |_| {
            if let Err(err) = adapter.with_chart(|chart| chart.zoom_out()) {
                eprintln!("zoom out failed: {err}");
            }
        }
    });
    controls.append(&zoom_out);

    let reset = gtk::Button::with_label("Reset View");
    reset.connect_clicked({
        let adapter = Rc::clone(&adapter);
        move |_| {
            if let Err(err) = adapter.with_chart(|chart| chart.reset_view()) {
                eprintln!("reset view failed: {err}");
            }
        }
    });
    controls.append(&reset);

    let my_position = gtk::Button::with_label("My Position");
    my_position.connect_clicked({
        let adapter = Rc::clone(&adapter);
        move |_| {
            if let Err(err) = adapter.with_chart(|chart| chart.go_to_my_position()) {
                eprintln!("go to my position failed: {err}");
            }
        }
    });
    controls.append(&my_position);

    let expand_all = gtk::Button::with_label("Expand All");
    expand_all.connect_clicked({
        let adapter = Rc::clone(&adapter);
        move |_| {
            adapter.with_chart(|chart| chart.expand_all());
        }
    });
    controls.append(&expand_all);

    let collapse_all = gtk::Button::with_label("Collapse All");
    collapse_all.connect_clicked({
        let adapter = Rc::clone(&adapter);
        move |_| {
            adapter.with_chart(|chart| chart.collapse_all());
        }
    });
    controls.append(&collapse_all);

    let export = gtk::Button::with_label("Export");
    export.connect_clicked({
        let adapter = Rc::clone(&adapter);
        move |_| adapter.with_chart(|chart| chart.notify_not_implemented("Export chart"))
    });
    controls.append(&export);

    let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
    root.set_margin_top(8);
    root.set_margin_bottom(8);
    root.set_margin_start(8);
    root.set_margin_end(8);
    root.append(&controls);
    root.append(adapter.drawing_area());
    root.append(&status_label);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("Organization Chart")
        .default_width(INITIAL_WIDTH)
        .default_height(INITIAL_HEIGHT + 80)
        .child(&root)
        .build();
    window.present();
}

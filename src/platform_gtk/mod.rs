//! GTK4 embedding: a `DrawingArea` wired to an [`OrgChart`] with drag-to-pan,
//! click, wheel zoom and pinch zoom.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{Notification, OrgChart};
use crate::core::Viewport;
use crate::render::CairoRenderer;

/// Wheel units GTK reports per discrete scroll step are 1.0; the chart uses
/// 120 per notch.
const GTK_SCROLL_STEP_UNITS: f64 = 120.0;

type NotificationHook = Rc<RefCell<Option<Box<dyn Fn(&Notification)>>>>;

pub struct GtkOrgChartAdapter {
    chart: Rc<RefCell<OrgChart<CairoRenderer>>>,
    drawing_area: gtk::DrawingArea,
    notification_hook: NotificationHook,
}

impl GtkOrgChartAdapter {
    #[must_use]
    pub fn new(chart: OrgChart<CairoRenderer>) -> Self {
        let chart = Rc::new(RefCell::new(chart));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        let notification_hook: NotificationHook = Rc::new(RefCell::new(None));

        let adapter = Self {
            chart,
            drawing_area,
            notification_hook,
        };
        adapter.install_draw_func();
        adapter.install_resize_handler();
        adapter.install_drag_controller();
        adapter.install_scroll_controller();
        adapter.install_zoom_gesture();
        adapter
    }

    #[must_use]
    pub fn chart(&self) -> Rc<RefCell<OrgChart<CairoRenderer>>> {
        Rc::clone(&self.chart)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Receives each notification the chart posts in response to widget input
    /// (node clicks, "go to my position", placeholder notices).
    pub fn set_notification_hook(&self, hook: impl Fn(&Notification) + 'static) {
        *self.notification_hook.borrow_mut() = Some(Box::new(hook));
    }

    /// Runs `action` against the chart, then redraws and flushes
    /// notifications. Used by host toolbar buttons.
    pub fn with_chart<T>(&self, action: impl FnOnce(&mut OrgChart<CairoRenderer>) -> T) -> T {
        let result = action(&mut self.chart.borrow_mut());
        flush_notifications(&self.chart, &self.notification_hook);
        self.drawing_area.queue_draw();
        result
    }

    fn install_draw_func(&self) {
        let chart = Rc::clone(&self.chart);
        self.drawing_area
            .set_draw_func(move |_area, context, _width, _height| {
                if let Err(err) = chart.borrow_mut().render_on_cairo_context(context) {
                    warn!(error = %err, "org chart draw failed");
                }
            });
    }

    fn install_resize_handler(&self) {
        let chart = Rc::clone(&self.chart);
        self.drawing_area.connect_resize(move |area, width, height| {
            let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
                return;
            };
            if width == 0 || height == 0 {
                return;
            }
            if let Err(err) = chart.borrow_mut().set_viewport(Viewport::new(width, height)) {
                warn!(error = %err, "org chart resize rejected");
            }
            area.queue_draw();
        });
    }

    fn install_drag_controller(&self) {
        let drag = gtk::GestureDrag::new();

        let chart = Rc::clone(&self.chart);
        drag.connect_drag_begin(move |_gesture, start_x, start_y| {
            if let Err(err) = chart.borrow_mut().pointer_down(start_x, start_y) {
                warn!(error = %err, "org chart pointer down rejected");
            }
        });

        let chart = Rc::clone(&self.chart);
        let area = self.drawing_area.clone();
        drag.connect_drag_update(move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                return;
            };
            match chart
                .borrow_mut()
                .pointer_move(start_x + offset_x, start_y + offset_y)
            {
                Ok(true) => area.queue_draw(),
                Ok(false) => {}
                Err(err) => warn!(error = %err, "org chart pointer move rejected"),
            }
        });

        let chart = Rc::clone(&self.chart);
        let area = self.drawing_area.clone();
        let hook = Rc::clone(&self.notification_hook);
        drag.connect_drag_end(move |gesture, offset_x, offset_y| {
            let Some((start_x, start_y)) = gesture.start_point() else {
                chart.borrow_mut().pointer_cancel();
                return;
            };
            let released = chart
                .borrow_mut()
                .pointer_up(start_x + offset_x, start_y + offset_y);
            if let Err(err) = released {
                warn!(error = %err, "org chart pointer up rejected");
            }
            flush_notifications(&chart, &hook);
            area.queue_draw();
        });

        self.drawing_area.add_controller(drag);
    }

    fn install_scroll_controller(&self) {
        let pointer = Rc::new(Cell::new((0.0_f64, 0.0_f64)));

        let motion = gtk::EventControllerMotion::new();
        let tracked = Rc::clone(&pointer);
        motion.connect_motion(move |_controller, x, y| tracked.set((x, y)));
        self.drawing_area.add_controller(motion);

        let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
        let chart = Rc::clone(&self.chart);
        let area = self.drawing_area.clone();
        scroll.connect_scroll(move |_controller, _dx, dy| {
            let (anchor_x, anchor_y) = pointer.get();
            match chart
                .borrow_mut()
                .wheel_zoom(dy * GTK_SCROLL_STEP_UNITS, anchor_x, anchor_y)
            {
                Ok(_) => area.queue_draw(),
                Err(err) => warn!(error = %err, "org chart wheel zoom rejected"),
            }
            glib::Propagation::Stop
        });
        self.drawing_area.add_controller(scroll);
    }

    fn install_zoom_gesture(&self) {
        let zoom = gtk::GestureZoom::new();
        let last_scale = Rc::new(Cell::new(1.0_f64));

        let reset = Rc::clone(&last_scale);
        zoom.connect_begin(move |_gesture, _sequence| reset.set(1.0));

        let chart = Rc::clone(&self.chart);
        let area = self.drawing_area.clone();
        zoom.connect_scale_changed(move |gesture, scale| {
            let previous = last_scale.replace(scale);
            if previous <= 0.0 {
                return;
            }
            let Some((anchor_x, anchor_y)) = gesture.bounding_box_center() else {
                return;
            };
            match chart
                .borrow_mut()
                .pinch_zoom(scale / previous, anchor_x, anchor_y)
            {
                Ok(_) => area.queue_draw(),
                Err(err) => warn!(error = %err, "org chart pinch zoom rejected"),
            }
        });
        self.drawing_area.add_controller(zoom);
    }
}

fn flush_notifications(chart: &Rc<RefCell<OrgChart<CairoRenderer>>>, hook: &NotificationHook) {
    let notifications = chart.borrow_mut().take_notifications();
    if let Some(hook) = hook.borrow().as_ref() {
        for notification in &notifications {
            hook(notification);
        }
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{debug, warn};

use crate::api::Figure;
use crate::error::{PlotError, PlotResult};
use crate::render::{CairoContextRenderer, CairoRenderer, RenderFrame, Renderer};

const DEFAULT_APPLICATION_ID: &str = "rs.trajplot.figure";

/// Renderer that shows each frame in its own GTK4 window.
///
/// `render` blocks until the window is closed, like an interactive `show`.
#[derive(Debug)]
pub struct GtkFigureWindow {
    application_id: String,
    title: String,
    windows_shown: usize,
}

impl Default for GtkFigureWindow {
    fn default() -> Self {
        Self::new("Figure")
    }
}

impl GtkFigureWindow {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            application_id: DEFAULT_APPLICATION_ID.to_owned(),
            title: title.into(),
            windows_shown: 0,
        }
    }

    #[must_use]
    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = application_id.into();
        self
    }

    #[must_use]
    pub fn windows_shown(&self) -> usize {
        self.windows_shown
    }

    /// Builds the frame for `figure` and shows it.
    pub fn show(&mut self, figure: &Figure) -> PlotResult<()> {
        let frame = figure.build_render_frame()?;
        self.render(&frame)
    }
}

impl Renderer for GtkFigureWindow {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        gtk::init()
            .map_err(|err| PlotError::InvalidData(format!("failed to initialize gtk: {err}")))?;

        let renderer = Rc::new(RefCell::new(CairoRenderer::for_viewport(frame.viewport)?));
        let frame = Rc::new(frame.clone());
        let title = self.title.clone();

        let app = gtk::Application::builder()
            .application_id(self.application_id.as_str())
            .flags(gtk::gio::ApplicationFlags::NON_UNIQUE)
            .build();
        app.connect_activate(move |app| {
            build_window(app, &title, Rc::clone(&frame), Rc::clone(&renderer));
        });

        let exit_code = app.run_with_args::<&str>(&[]);
        if exit_code != gtk::glib::ExitCode::SUCCESS {
            return Err(PlotError::InvalidData(format!(
                "figure window exited with {exit_code:?}"
            )));
        }
        self.windows_shown += 1;
        debug!(windows_shown = self.windows_shown, "figure window closed");
        Ok(())
    }
}

fn build_window(
    app: &gtk::Application,
    title: &str,
    frame: Rc<RenderFrame>,
    renderer: Rc<RefCell<CairoRenderer>>,
) {
    let width = i32::try_from(frame.viewport.width).unwrap_or(i32::MAX);
    let height = i32::try_from(frame.viewport.height).unwrap_or(i32::MAX);

    let drawing_area = gtk::DrawingArea::new();
    drawing_area.set_content_width(width);
    drawing_area.set_content_height(height);
    drawing_area.set_draw_func(move |_area, context, _width, _height| {
        if let Err(err) = renderer
            .borrow_mut()
            .render_on_cairo_context(context, &frame)
        {
            warn!(error = %err, "failed to draw figure frame");
        }
    });

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title(title)
        .default_width(width)
        .default_height(height)
        .child(&drawing_area)
        .build();
    window.present();
}

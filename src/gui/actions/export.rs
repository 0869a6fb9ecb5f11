// src/gui/actions/export.rs
use tracing::{debug, error, info};

use crate::gui::app::App;

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        info!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let Some(sheet) = &app.sheet else {
        debug!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    };

    let export = &app.state.options.export;
    let path = export.out_path();
    info!("Export: Begin rows={}, format={:?}", sheet.len(), export.format);

    let msg = match sheet.save(&path, export.format) {
        Ok(path) => {
            info!("Export: OK {}", path.display());
            format!("Exported {} row(s) to {}", sheet.len(), path.display())
        }
        Err(e) => {
            error!("Export: Error: {e}");
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}

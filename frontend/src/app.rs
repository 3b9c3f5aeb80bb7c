//! Page startup: resolves the page context once and wires every control panel component.
//!
//! Each component is a separate setup step. A step that fails is logged and skipped; the others
//! still run.

use common::model::dialog::control_panel_dialogs;

use crate::components::{block_editor, dialogs, markdown_preview, share, toolbar};
use crate::context::PanelContext;
use crate::error::SetupError;

/// A named setup step. Returns how many page elements it wired.
pub type SetupStep<C> = (&'static str, fn(&C) -> Result<usize, SetupError>);

const PANEL_STEPS: [SetupStep<PanelContext>; 6] = [
    ("markup dialogs", dialogs::wire_markup_dialogs),
    ("synthesized dialogs", synthesize_dialogs),
    ("share buttons", |ctx| Ok(share::bind_share_buttons(ctx))),
    ("rich text toolbars", toolbar::bind_rich_text_editors),
    ("markdown editors", |ctx| Ok(markdown_preview::mount_all(ctx))),
    ("block editors", |ctx| Ok(block_editor::mount_all(ctx))),
];

/// Resolves the page and runs every setup step, logging the outcome of each.
///
/// Only a page without window or document is an error here.
pub fn start() -> Result<(), SetupError> {
    let ctx = PanelContext::resolve()?;

    for (name, result) in run_steps(&ctx, &PANEL_STEPS) {
        match result {
            Ok(count) => gloo_console::log!(format!("Control panel: {count} {name} ready")),
            Err(err) => gloo_console::error!(format!("Control panel: {name} setup failed: {err}")),
        }
    }
    Ok(())
}

/// Runs every step in order, regardless of how earlier steps went.
pub fn run_steps<C>(
    ctx: &C,
    steps: &[SetupStep<C>],
) -> Vec<(&'static str, Result<usize, SetupError>)> {
    steps.iter().map(|(name, step)| (*name, step(ctx))).collect()
}

fn synthesize_dialogs(ctx: &PanelContext) -> Result<usize, SetupError> {
    if !ctx.synthesizes_dialogs() {
        return Ok(0);
    }
    let descriptors = control_panel_dialogs();
    for descriptor in &descriptors {
        dialogs::create_dialog(ctx, descriptor)?;
    }
    Ok(descriptors.len())
}

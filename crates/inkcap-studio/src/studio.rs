//! The studio orchestrator
//!
//! Owns the renderer, the document, and the interaction controller, and
//! keeps the derived bounding box honest: every mutation entry point that
//! could change text shape ends in an explicit recompute.

use tracing::{debug, info};

use inkcap_input::{InteractionController, InteractionUpdate, PointerEvent};
use inkcap_render::{encode, DecodedImage, ExportFormat, OverlayRenderer, Surface};
use inkcap_text::style::BOX_PADDING;
use inkcap_text::{CanvasGeometry, Color, Point, Rect, TextAlign};

use crate::document::{BOX_EPSILON, StudioDocument};
use crate::export::ExportFile;
use crate::generation::{AnalysisRequest, ArtStyle, ColorMood, GenerationService, PostFormat};
use crate::placement::placement_anchor;
use crate::presets::{next_preset_id, BrandPreset, PresetStore};
use crate::{Result, StudioError};

/// One editing session: renderer + document + interaction
pub struct Studio {
    renderer: OverlayRenderer,
    document: StudioDocument,
    controller: InteractionController,
    presets: Vec<BrandPreset>,
}

impl Studio {
    pub fn new(renderer: OverlayRenderer, geometry: CanvasGeometry) -> Self {
        Self {
            renderer,
            document: StudioDocument::new(geometry),
            controller: InteractionController::new(),
            presets: Vec::new(),
        }
    }

    pub fn document(&self) -> &StudioDocument {
        &self.document
    }

    pub fn renderer(&self) -> &OverlayRenderer {
        &self.renderer
    }

    pub fn presets(&self) -> &[BrandPreset] {
        &self.presets
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    // ── State mutation ──────────────────────────────────────────────

    /// Rederive the bounding box from the current state
    ///
    /// Returns true when the box actually moved (beyond epsilon); callers
    /// use that to decide whether a redraw is needed.
    pub fn recompute(&mut self) -> bool {
        let new_box = self.renderer.compute_box(
            &self.document.caption,
            &self.document.style,
            self.document.anchor,
            1.0,
            self.document.geometry.display_width,
        );

        let changed = match (self.document.bounding_box, new_box) {
            (Some(old), Some(new)) => !old.approx_eq(&new, BOX_EPSILON),
            (None, None) => false,
            _ => true,
        };
        if changed {
            debug!(?new_box, "bounding box updated");
            self.document.bounding_box = new_box;
        }
        changed
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) -> bool {
        self.document.caption = caption.into();
        self.recompute()
    }

    pub fn set_font_size(&mut self, size_px: f32) -> bool {
        self.document.style.font_size_px = size_px;
        self.recompute()
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) -> bool {
        self.document.style.font_family = family.into();
        self.recompute()
    }

    pub fn set_color_css(&mut self, css: &str) -> bool {
        self.document.style.color = Color::from_css(css);
        self.recompute()
    }

    pub fn set_align(&mut self, align: TextAlign) -> bool {
        self.document.style.align = align;
        self.recompute()
    }

    /// Move the caption anchor
    ///
    /// Manual positioning wins: any pending automatic-placement hint is
    /// dropped so a later layout pass cannot override the user.
    pub fn set_anchor(&mut self, anchor: Point) -> bool {
        self.document.anchor = anchor;
        self.document.placement_hint = None;
        self.recompute()
    }

    pub fn set_geometry(&mut self, geometry: CanvasGeometry) -> bool {
        self.document.geometry = geometry;
        self.recompute()
    }

    /// Refit the display canvas into a container (resize event)
    pub fn resize_display(&mut self, container_width: f32, container_height: f32, aspect_ratio: f32) -> bool {
        self.document.geometry = CanvasGeometry::fit(
            container_width,
            container_height,
            aspect_ratio,
            self.document.geometry.natural_width,
            self.document.geometry.natural_height,
        );
        self.recompute()
    }

    /// Install a background image; natural resolution follows the image
    pub fn set_background(&mut self, image: DecodedImage) -> bool {
        self.document.geometry.natural_width = image.width as f32;
        self.document.geometry.natural_height = image.height as f32;
        self.document.background = Some(image);
        self.recompute()
    }

    // ── Interaction ─────────────────────────────────────────────────

    /// Feed a pointer event through the interaction controller
    ///
    /// A drag commit goes through [`Studio::set_anchor`], which also clears
    /// any pending placement hint.
    pub fn pointer_event(&mut self, event: PointerEvent) -> InteractionUpdate {
        let update = self
            .controller
            .handle(event, self.document.bounding_box, self.document.anchor);
        if let Some(anchor) = update.new_anchor {
            self.set_anchor(anchor);
        }
        update
    }

    // ── Placement ───────────────────────────────────────────────────

    /// Consume the pending placement hint, if any
    ///
    /// Computes a concrete anchor for the current canvas and text block and
    /// clears the hint. No caption or no hint means nothing happens.
    pub fn apply_automatic_placement(&mut self) -> bool {
        let Some(hint) = self.document.placement_hint else {
            return false;
        };
        let Some(bounding_box) = self.document.bounding_box else {
            return false;
        };

        // Unpadded text block height
        let text_height = bounding_box.height - 2.0 * BOX_PADDING;
        let anchor = placement_anchor(hint, &self.document.geometry, text_height);
        debug!(?hint, ?anchor, "automatic placement applied");

        self.document.anchor = anchor;
        self.document.placement_hint = None;
        self.recompute();
        true
    }

    // ── Rendering & export ──────────────────────────────────────────

    /// Composite the display frame; the selection outline shows while the
    /// caption is hovered or dragged
    pub fn render_display(&mut self, surface: &mut Surface) -> Option<Rect> {
        let show_outline = self.controller.is_hovering();
        let rect = self.renderer.render(
            surface,
            self.document.background.as_ref(),
            &self.document.caption,
            &self.document.style,
            self.document.anchor,
            1.0,
            show_outline,
        );
        // The render pass is the other legitimate writer of the box
        let changed = match (self.document.bounding_box, rect) {
            (Some(old), Some(new)) => !old.approx_eq(&new, BOX_EPSILON),
            (None, None) => false,
            _ => true,
        };
        if changed {
            self.document.bounding_box = rect;
        }
        rect
    }

    /// Flatten the composition at natural resolution
    ///
    /// Never draws the selection outline. `include_text` false exports the
    /// bare background.
    pub fn export_composite(&self, format: ExportFormat, include_text: bool) -> Result<ExportFile> {
        let width = self.document.geometry.natural_width.round().max(0.0) as u32;
        let height = self.document.geometry.natural_height.round().max(0.0) as u32;
        let mut surface = Surface::new(width, height).map_err(StudioError::Render)?;

        let content = if include_text { self.document.caption.as_str() } else { "" };
        self.renderer.render(
            &mut surface,
            self.document.background.as_ref(),
            content,
            &self.document.style,
            self.document.anchor,
            self.document.geometry.export_scale(),
            false,
        );

        let bytes = encode(&surface, format).map_err(StudioError::Render)?;
        info!(file_size = bytes.len(), ?format, "composite exported");
        Ok(ExportFile::new(format, bytes))
    }

    // ── Generation ──────────────────────────────────────────────────

    /// Run the analyze + generate flow against a service
    ///
    /// State is committed only after both calls and the decode succeed, so a
    /// failure leaves the document exactly as it was.
    pub fn generate(
        &mut self,
        service: &dyn GenerationService,
        prompt: &str,
        format: PostFormat,
        mood: ColorMood,
        art_style: ArtStyle,
    ) -> Result<()> {
        let existing = if self.document.caption.is_empty() {
            None
        } else {
            Some(self.document.caption.as_str())
        };
        let request = AnalysisRequest {
            prompt,
            format,
            mood,
            style: art_style,
            existing_caption: existing,
        };

        let analysis = service.analyze(&request)?;
        let image_bytes = service.generate_image(&analysis.refined_prompt, format.aspect_tag())?;
        let image = DecodedImage::decode(&image_bytes).map_err(StudioError::Render)?;

        self.document.caption = analysis.caption;
        self.document.placement_hint = Some(analysis.placement);
        self.document.geometry.natural_width = image.width as f32;
        self.document.geometry.natural_height = image.height as f32;
        self.document.background = Some(image);
        self.recompute();
        Ok(())
    }

    // ── Presets ─────────────────────────────────────────────────────

    /// Load presets from the store (startup)
    pub fn load_presets(&mut self, store: &dyn PresetStore) -> Result<usize> {
        self.presets = store.load()?;
        info!(count = self.presets.len(), "presets loaded");
        Ok(self.presets.len())
    }

    /// Save the current color + font under a name and persist the full list
    pub fn save_preset(&mut self, name: impl Into<String>, store: &dyn PresetStore) -> Result<BrandPreset> {
        let style = &self.document.style;
        let color = style.color;
        let preset = BrandPreset {
            id: next_preset_id(),
            name: name.into(),
            color: format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b),
            font_family: style.font_family.clone(),
        };
        self.presets.push(preset.clone());
        store.save_all(&self.presets)?;
        Ok(preset)
    }

    /// Apply a stored preset's color and font to the caption
    pub fn apply_preset(&mut self, id: &str) -> Result<bool> {
        let preset = self
            .presets
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| StudioError::UnknownPreset(id.to_string()))?;
        self.document.style.color = Color::from_css(&preset.color);
        self.document.style.font_family = preset.font_family.clone();
        Ok(self.recompute())
    }
}

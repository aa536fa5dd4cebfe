//! SVG/HTML markup for a frame descriptor
//!
//! The dial SVG is `frame_size` square; the face sits `frame_offset` in from
//! each edge. Dial percentages map onto the face's `clock_size` box.

use std::fmt::{self, Write};

use glam::DVec2;
use html_escape::encode_text;

use super::palette::Theme;
use crate::composer::FrameDescriptor;
use crate::consts::DIAL_UNITS;
use crate::layout::{HandGeometry, LayoutGeometry, MarkSize, Placement};

/// Element id of the fullscreen button
pub const FULLSCREEN_BUTTON_ID: &str = "fullscreen-btn";

/// Map a dial percentage position to frame pixels
fn to_frame_px(layout: &LayoutGeometry, pos: DVec2) -> DVec2 {
    DVec2::splat(layout.frame_offset) + pos / DIAL_UNITS * layout.clock_size
}

fn write_rays(out: &mut String, layout: &LayoutGeometry, theme: &Theme) -> fmt::Result {
    let c = layout.frame_size / 2.0;
    let leaf = &layout.leaf;
    for ray in &layout.rays {
        write!(
            out,
            r#"<g transform="rotate({} {c} {c})">"#,
            ray.rotation_deg
        )?;
        write!(
            out,
            r#"<path d="M {} {} L {} {} Q {} {} {} {} L {} {}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            leaf.base.x,
            leaf.base.y,
            leaf.tip_left.x,
            leaf.tip_left.y,
            leaf.control.x,
            leaf.control.y,
            leaf.tip_right.x,
            leaf.tip_right.y,
            leaf.base.x,
            leaf.base.y,
            theme.ray_fill,
            theme.ray_stroke,
            leaf.stroke_width,
        )?;
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" stroke="{}" stroke-width="{}"/></g>"#,
            leaf.rect_origin.x,
            leaf.rect_origin.y,
            leaf.rect_size.x,
            leaf.rect_size.y,
            leaf.corner_radius,
            theme.ray_fill,
            theme.ray_stroke,
            leaf.stroke_width,
        )?;
    }
    Ok(())
}

fn write_face(out: &mut String, layout: &LayoutGeometry, theme: &Theme) -> fmt::Result {
    let c = layout.frame_size / 2.0;
    let face = &layout.face;
    let outer = layout.clock_size / 2.0;
    let inner = outer - face.outer_rim_padding - face.outer_rim_border;
    let dial = inner - face.inner_rim_padding - face.inner_rim_border;

    for (r, fill, stroke, width) in [
        (outer, theme.outer_rim, theme.outer_rim_border, face.outer_rim_border),
        (inner, theme.inner_rim, theme.inner_rim_border, face.inner_rim_border),
        (dial.max(0.0), theme.dial, theme.dial, 0.0),
    ] {
        write!(
            out,
            r#"<circle cx="{c}" cy="{c}" r="{}" fill="{fill}" stroke="{stroke}" stroke-width="{width}"/>"#,
            (r - width / 2.0).max(0.0),
        )?;
    }
    Ok(())
}

fn write_ticks(
    out: &mut String,
    layout: &LayoutGeometry,
    ticks: &[Placement],
    size: MarkSize,
    color: &str,
) -> fmt::Result {
    for tick in ticks {
        let p = to_frame_px(layout, tick.pos);
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}" transform="rotate({} {} {})"/>"#,
            p.x - size.width / 2.0,
            p.y - size.length / 2.0,
            size.width,
            size.length,
            tick.rotation_deg,
            p.x,
            p.y,
        )?;
    }
    Ok(())
}

fn write_labels(out: &mut String, layout: &LayoutGeometry, theme: &Theme, brand: &str) -> fmt::Result {
    let face = &layout.face;
    let c = layout.frame_size / 2.0;
    let brand_y = layout.frame_offset + face.brand_top_pct / DIAL_UNITS * layout.clock_size;
    write!(
        out,
        r#"<text x="{c}" y="{brand_y}" font-family="serif" letter-spacing="0.1em" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="hanging">{}</text>"#,
        face.brand_font,
        theme.brand,
        encode_text(brand),
    )?;
    for numeral in &layout.numerals {
        let p = to_frame_px(layout, numeral.placement.pos);
        write!(
            out,
            r#"<text x="{}" y="{}" font-family="serif" font-weight="500" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            p.x, p.y, face.numeral_font, theme.numeral, numeral.value,
        )?;
    }
    Ok(())
}

fn write_hand(
    out: &mut String,
    layout: &LayoutGeometry,
    hand: &HandGeometry,
    angle: f64,
    color: &str,
) -> fmt::Result {
    let c = layout.frame_size / 2.0;
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{color}" transform="rotate({angle} {c} {c})"/>"#,
        c - hand.width / 2.0,
        c - (hand.length - hand.tail()),
        hand.width,
        hand.length,
        hand.width / 2.0,
    )
}

fn write_dial(out: &mut String, frame: &FrameDescriptor, theme: &Theme, brand: &str) -> fmt::Result {
    let layout = &frame.layout;
    let f = layout.frame_size;
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{f}" height="{f}" viewBox="0 0 {f} {f}">"#
    )?;
    write_rays(out, layout, theme)?;
    write_face(out, layout, theme)?;
    write_ticks(out, layout, &layout.minute_ticks, layout.face.minute_tick, theme.minute_tick)?;
    write_ticks(out, layout, &layout.hour_ticks, layout.face.hour_tick, theme.hour_tick)?;
    write_labels(out, layout, theme, brand)?;
    write_hand(out, layout, &layout.hands.hour, frame.angles.hour, theme.hand)?;
    write_hand(out, layout, &layout.hands.minute, frame.angles.minute, theme.hand)?;
    write_hand(out, layout, &layout.hands.second, frame.angles.second, theme.second_hand)?;
    let c = f / 2.0;
    write!(
        out,
        r#"<circle cx="{c}" cy="{c}" r="{}" fill="{}"/></svg>"#,
        layout.face.center_dot / 2.0,
        theme.center_dot,
    )
}

fn write_digital(out: &mut String, frame: &FrameDescriptor, theme: &Theme) -> fmt::Result {
    let d = &frame.layout.digital;
    write!(
        out,
        r#"<div style="font-family:monospace;text-align:center;border-radius:8px;border:2px solid {};background:{};color:{};padding:{}px {}px;font-size:{}px;min-width:{}px;max-width:{}px">"#,
        theme.digital_border,
        theme.digital_background,
        theme.digital_text,
        d.padding_v,
        d.padding_h,
        d.font_size,
        d.min_width,
        d.max_width,
    )?;
    write!(
        out,
        r#"<div style="white-space:nowrap">{}</div><div style="white-space:nowrap;margin-top:4px;font-size:{}px">{}</div></div>"#,
        encode_text(&frame.labels.time),
        d.date_font_size,
        encode_text(&frame.labels.date),
    )
}

/// Standalone SVG of the sunburst frame, face and hands
pub fn render_svg(frame: &FrameDescriptor, theme: &Theme, brand: &str) -> String {
    let mut out = String::with_capacity(32 * 1024);
    write_dial(&mut out, frame, theme, brand).ok();
    out
}

fn write_widget(out: &mut String, frame: &FrameDescriptor, theme: &Theme, brand: &str) -> fmt::Result {
    let layout = &frame.layout;
    if frame.show_fullscreen_button {
        write!(
            out,
            r#"<button id="{FULLSCREEN_BUTTON_ID}" style="position:absolute;top:1rem;right:1rem;z-index:30;border:1px solid {}">Fullscreen</button>"#,
            theme.digital_border,
        )?;
    }
    out.push_str(r#"<div style="display:flex;align-items:center;gap:2rem;width:100%">"#);
    write!(
        out,
        r#"<div style="position:relative;flex-shrink:0;margin:{o}px"><div style="position:absolute;top:-{o}px;left:-{o}px">"#,
        o = layout.frame_offset,
    )?;
    write_dial(out, frame, theme, brand)?;
    write!(
        out,
        r#"</div><div style="width:{s}px;height:{s}px"></div></div>"#,
        s = layout.clock_size,
    )?;
    out.push_str(r#"<div style="flex:1;display:flex;align-items:center;justify-content:center">"#);
    write_digital(out, frame, theme)?;
    out.push_str("</div></div>");
    Ok(())
}

/// Full widget markup: fullscreen button (when visible), dial and digital box
pub fn render_html(frame: &FrameDescriptor, theme: &Theme, brand: &str) -> String {
    let mut out = String::with_capacity(36 * 1024);
    write_widget(&mut out, frame, theme, brand).ok();
    out
}

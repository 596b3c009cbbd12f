//! The visualization layout.
//!
//! ```text
//! +----------------------+-----------+-----+
//! | CQT 1200x540         | Diff      |     |
//! |                      | 600x540   |     |
//! +----------------------+-----------+ Vol |
//! | Spectrum 1800x270                | 120 |
//! +-----------------+----------------+  x  |
//! | Waves 900x270   | Power 900x270  |1080 |
//! +-----------------+----------------+-----+
//! ```
//!
//! Padded panes draw a 1px border in the pad color around their content.

use super::{Filter, FilterChain, FilterGraph, escape_graph_path};
use crate::config::{RenderConfig, TitleStyle};

pub const FRAME_WIDTH: u32 = 1920;
pub const FRAME_HEIGHT: u32 = 1080;

/// Label of the final video stream, mapped with `-map [vout]`.
pub const OUTPUT_LABEL: &str = "vout";

const SPLIT_LABELS: [&str; 6] = ["a_cqt", "a_diff", "a_spec", "a_waves", "a_power", "a_vol"];

const TITLE_FONT_SIZE: u32 = 20;
const TITLE_OFFSET: u32 = 10;
const CQT_NOTES_COLOR: &str = "0xffffff";
const DIFF_FADE_ALPHA: u8 = 5;
const TRANSPARENT: &str = "black@0";

/// Builds the complete graph for one render.
pub fn build_filter_graph(config: &RenderConfig) -> FilterGraph {
    let split = SPLIT_LABELS
        .iter()
        .fold(
            FilterChain::new()
                .input("0:a")
                .filter(Filter::new("asplit").arg(SPLIT_LABELS.len())),
            |chain, label| chain.output(label),
        );

    FilterGraph::new()
        .chain(split)
        .chain(cqt_pane(config))
        .chain(diff_pane(config))
        .chain(stack("hstack", &["cqt", "diff"], "upper"))
        .chain(spectrum_pane(config))
        .chain(waves_pane(config))
        .chain(power_pane(config))
        .chain(stack("hstack", &["waves", "power"], "bottom"))
        .chain(stack("vstack", &["spectrum", "bottom"], "lower"))
        .chain(stack("vstack", &["upper", "lower"], "left"))
        .chain(vol_pane(config))
        .chain(
            FilterChain::new()
                .input("left")
                .input("vol")
                .filter(Filter::new("hstack").param("inputs", 2))
                .filter(Filter::new("format").arg("yuv420p"))
                .output(OUTPUT_LABEL),
        )
}

fn stack(kind: &str, inputs: &[&str], output: &str) -> FilterChain {
    inputs
        .iter()
        .fold(FilterChain::new(), |chain, label| chain.input(label))
        .filter(Filter::new(kind).param("inputs", inputs.len()))
        .output(output)
}

fn title(style: &TitleStyle, text: &str) -> Filter {
    Filter::new("drawtext")
        .param("fontfile", escape_graph_path(&style.font))
        .param("text", text)
        .param("fontcolor", style.color.engine_literal())
        .param("fontsize", TITLE_FONT_SIZE)
        .param("x", TITLE_OFFSET)
        .param("y", TITLE_OFFSET)
}

/// 1px border in the pad color.
fn border(config: &RenderConfig) -> Filter {
    Filter::new("pad")
        .param("w", "iw+2")
        .param("h", "ih+2")
        .param("x", 1)
        .param("y", 1)
        .param("color", config.pad_color.engine_literal())
}

fn rgba() -> Filter {
    Filter::new("format").arg("rgba")
}

fn cqt_pane(config: &RenderConfig) -> FilterChain {
    let cqt = &config.cqt;
    let [lr, lg, lb] = cqt.color_left.ratios();
    let [rr, rg, rb] = cqt.color_right.ratios();

    FilterChain::new()
        .input(SPLIT_LABELS[0])
        .filter(
            Filter::new("showcqt")
                .param("s", "1200x540")
                .param("r", config.frame_rate)
                .param("bar_h", 510)
                .param("axis_h", 30)
                .param("sono_h", 0)
                .param("bar_g", cqt.gamma)
                .param("bar_t", cqt.bar_transparency)
                .param("bar_v", cqt.bar_volume)
                .param("tc", cqt.timeclamp)
                .param("cscheme", [lr, lg, lb, rr, rg, rb].join("|"))
                .param("fontfile", escape_graph_path(&cqt.notes_font))
                .param("fontcolor", CQT_NOTES_COLOR),
        )
        .filter(title(&config.title, "CQT"))
        .filter(rgba())
        .output("cqt")
}

fn diff_pane(config: &RenderConfig) -> FilterChain {
    let diff = &config.diff;
    let (ar, ag, ab) = diff.color_add.rgb();
    let (fr, fg, fb) = diff.color_fade.rgb();

    FilterChain::new()
        .input(SPLIT_LABELS[1])
        .filter(
            Filter::new("avectorscope")
                .param("s", "538x538")
                .param("r", config.frame_rate)
                .param("rc", ar)
                .param("gc", ag)
                .param("bc", ab)
                .param("ac", 255)
                .param("rf", fr)
                .param("gf", fg)
                .param("bf", fb)
                .param("af", DIFF_FADE_ALPHA),
        )
        .filter(
            Filter::new("pad")
                .param("w", 598)
                .param("h", 538)
                .param("x", 30)
                .param("y", 0)
                .param("color", TRANSPARENT),
        )
        .filter(rgba())
        .filter(
            Filter::new("rotate")
                .param("a", format!("(-90+{})*PI/180", diff.rotate))
                .param("c", TRANSPARENT),
        )
        .filter(border(config))
        .filter(title(&config.title, "Diff"))
        .filter(rgba())
        .output("diff")
}

fn spectrum_pane(config: &RenderConfig) -> FilterChain {
    let spec = &config.spectrum;

    FilterChain::new()
        .input(SPLIT_LABELS[2])
        .filter(
            Filter::new("showspectrum")
                .param("s", "1798x268")
                .param("fps", config.frame_rate)
                .param("color", spec.color)
                .param("scale", spec.scale)
                .param("fscale", "log")
                .param("saturation", spec.saturation)
                .param("win_func", spec.win_func)
                .param("drange", spec.drange),
        )
        .filter(border(config))
        .filter(title(&config.title, "Spectrum"))
        .filter(rgba())
        .output("spectrum")
}

fn channel_colors(config: &RenderConfig) -> String {
    format!(
        "{}|{}",
        config.waves.color_left.engine_literal(),
        config.waves.color_right.engine_literal()
    )
}

fn waves_pane(config: &RenderConfig) -> FilterChain {
    FilterChain::new()
        .input(SPLIT_LABELS[3])
        .filter(
            Filter::new("showwaves")
                .param("s", "898x268")
                .param("r", config.frame_rate)
                .param("mode", "p2p")
                .param("draw", "full")
                .param("colors", channel_colors(config)),
        )
        .filter(border(config))
        .filter(title(&config.title, "Waves"))
        .filter(rgba())
        .output("waves")
}

fn power_pane(config: &RenderConfig) -> FilterChain {
    FilterChain::new()
        .input(SPLIT_LABELS[4])
        .filter(
            Filter::new("showfreqs")
                .param("s", "898x268")
                .param("rate", config.frame_rate)
                .param("mode", "line")
                .param("cmode", "separate")
                .param("ascale", "cbrt")
                .param("fscale", "log")
                .param("win_func", "hanning")
                .param("colors", channel_colors(config)),
        )
        .filter(border(config))
        .filter(title(&config.title, "Power"))
        .filter(rgba())
        .output("power")
}

fn vol_pane(config: &RenderConfig) -> FilterChain {
    FilterChain::new()
        .input(SPLIT_LABELS[5])
        .filter(
            Filter::new("showvolume")
                .param("r", config.frame_rate)
                .param("w", 1080)
                .param("h", 59)
                .param("b", 2)
                .param("c", config.vol_color.engine_literal())
                .param("o", "v")
                .param("m", "p")
                .param("ds", "log")
                .param("t", 0)
                .param("v", 0)
                .param("p", 0.3),
        )
        .filter(title(&config.title, "Vol"))
        .filter(rgba())
        .output("vol")
}

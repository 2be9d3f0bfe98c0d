use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::LayoutSnapshot;
use crate::geometry::primitives::Cuboid;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Orthographic view of a 3D layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Projection {
    /// x horizontally, y vertically, viewed along the z-axis
    Top,
    /// x horizontally, z vertically, viewed along the y-axis
    Front,
    /// y horizontally, z vertically, viewed along the x-axis
    Side,
}

impl Projection {
    pub const ALL: [Projection; 3] = [Projection::Top, Projection::Front, Projection::Side];

    /// Splits the extents of a cuboid into (horizontal, vertical, depth) intervals for this view.
    pub fn axes(self, c: &Cuboid) -> ([f32; 2], [f32; 2], [f32; 2]) {
        let x = [c.x_min, c.x_max];
        let y = [c.y_min, c.y_max];
        let z = [c.z_min, c.z_max];
        match self {
            Projection::Top => (x, y, z),
            Projection::Front => (x, z, y),
            Projection::Side => (y, z, x),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Projection::Top => "top",
            Projection::Front => "front",
            Projection::Side => "side",
        }
    }
}

impl Display for Projection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Draws a projection of the layout. Items closer to the viewer are drawn on top.
/// The vertical axis points upwards, with the origin of the container in the bottom left corner.
pub fn layout_to_svg(
    s_layout: &LayoutSnapshot,
    projection: Projection,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let (c_u, c_v, c_d) = projection.axes(&s_layout.container.bbox());
    let (width, height, depth) = (c_u[1], c_v[1], c_d[1]);
    let theme = &options.theme;

    let margin = 0.05 * f32::max(width, height);
    let stroke_width = f32::min(width, height) * 0.001 * theme.stroke_width_multiplier;
    let flip = |v: [f32; 2]| [height - v[1], height - v[0]];

    let label = {
        let font_size = f32::min(width, height) * 0.025;
        Text::new(format!(
            "{projection} | width: {width:.3} | height: {height:.3} | density: {:.3}% | {title}",
            s_layout.density * 100.0,
        ))
        .set("x", 0.0)
        .set("y", -0.5 * font_size)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("font-weight", "500")
    };

    let container_group = Group::new()
        .set("id", "container")
        .add(svg_util::data_to_path(
            svg_util::rect_data([0.0, width], [0.0, height]),
            &[
                ("fill", &*format!("{}", theme.container_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "container, {} view, [width: {width:.3}, height: {height:.3}, depth: {depth:.3}]",
            projection
        )));

    let items_group = {
        let mut items_group = Group::new().set("id", "items");
        let sorted_items = s_layout
            .placed_items
            .iter()
            .map(|pi| (pi, projection.axes(&pi.cuboid())))
            .sorted_by_key(|(_, (_, _, d))| OrderedFloat(d[1]));

        for (pi, (u, v, d)) in sorted_items {
            let color = match options.depth_shading {
                true => svg_util::change_brightness(theme.item_fill, 0.6 + 0.4 * d[1] / depth),
                false => theme.item_fill,
            };
            let v = flip(v);
            let mut group = Group::new()
                .set("id", format!("item_{}", pi.item_id()))
                .add(svg_util::data_to_path(
                    svg_util::rect_data(u, v),
                    &[
                        ("fill", &*format!("{color}")),
                        ("fill-opacity", &*format!("{}", theme.item_opacity)),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ))
                .add(Title::new(format!(
                    "item, id: {}, dims: {}, pos: {}, rotation: {}",
                    pi.item_id(),
                    pi.item.dims,
                    pi.position,
                    pi.rotation
                )));
            if options.item_labels {
                let font_size = f32::min(u[1] - u[0], v[1] - v[0]) * 0.4;
                group = group.add(
                    Text::new(format!("{}", pi.item_id()))
                        .set("x", (u[0] + u[1]) / 2.0)
                        .set("y", (v[0] + v[1]) / 2.0)
                        .set("font-size", font_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            items_group = items_group.add(group);
        }
        items_group
    };

    Document::new()
        .set(
            "viewBox",
            (-margin, -margin, width + 2.0 * margin, height + 2.0 * margin),
        )
        .add(container_group)
        .add(items_group)
        .add(label)
}

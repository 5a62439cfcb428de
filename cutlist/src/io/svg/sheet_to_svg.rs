use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::Sheet;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::{Color, SvgDrawOptions};

/// Renders a sheet with all of its placed parts.
pub fn sheet_to_svg(sheet: &Sheet, options: SvgDrawOptions, title: &str) -> Document {
    let bbox = sheet.bbox();
    let vbox = bbox.scale(1.10);

    let theme = &options.theme;

    let stroke_width =
        f32::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f32::min(bbox.width(), bbox.height()) * 0.025;

    let label = {
        //print some information above the left top of the sheet
        let label_content = format!(
            "sheet #{} | {} x {} | parts: {} | efficiency: {:.3}% | skyline top: {} | {}",
            sheet.index,
            bbox.width(),
            bbox.height(),
            sheet.placed_parts.len(),
            sheet.efficiency() * 100.0,
            sheet.top(),
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set("y", bbox.y_min - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw sheet
    let sheet_group = {
        let mut group = Group::new()
            .set("id", format!("sheet_{}", sheet.index))
            .add(
                svg_util::data_to_path(
                    svg_util::rect_data(&bbox),
                    &[
                        ("fill", &*format!("{}", theme.sheet_fill)),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                    ],
                )
                .add(Title::new(format!(
                    "sheet #{}, {} x {}",
                    sheet.index,
                    bbox.width(),
                    bbox.height()
                ))),
            );

        //trim band along the boundary
        if let Some(usable) = bbox.resize_by(-sheet.edge_margin, -sheet.edge_margin) {
            if sheet.edge_margin > 0.0 {
                group = group.add(svg_util::data_to_path(
                    svg_util::rect_data(&usable),
                    &[
                        ("fill", "none"),
                        ("stroke", &*format!("{}", theme.margin_fill)),
                        ("stroke-width", &*format!("{}", stroke_width)),
                        ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ],
                ));
            }
        }
        group
    };

    //draw parts
    let parts_group = {
        let mut group = Group::new().set("id", "parts");
        for pp in &sheet.placed_parts {
            let fill = match options.material_colors {
                true => Color::parse(&pp.part.material.color).unwrap_or(theme.part_fill),
                false => theme.part_fill,
            };
            let stroke = svg_util::change_brightness(fill, 0.5);
            let bbox = pp.bbox();
            let mut part_group = Group::new().add(
                svg_util::data_to_path(
                    svg_util::rect_data(&bbox),
                    &[
                        ("fill", &*format!("{fill}")),
                        ("fill-opacity", "0.9"),
                        ("stroke", &*format!("{stroke}")),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                )
                .add(Title::new(format!(
                    "part {}, {} x {} (nominal {} x {}), rotation: {}, at ({}, {})",
                    pp.part.id,
                    pp.width,
                    pp.height,
                    pp.part.width,
                    pp.part.height,
                    pp.rotation,
                    pp.x,
                    pp.y
                ))),
            );
            if options.labels {
                let label_size = f32::min(font_size, 0.3 * f32::min(bbox.width(), bbox.height()));
                part_group = part_group.add(
                    Text::new(pp.part.label.clone().unwrap_or_else(|| pp.part.id.clone()))
                        .set("x", bbox.x_min + 0.5 * bbox.width())
                        .set("y", bbox.y_min + 0.5 * bbox.height())
                        .set("font-size", label_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle"),
                );
            }
            group = group.add(part_group);
        }
        group
    };

    let mut doc = Document::new()
        .set(
            "viewBox",
            (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()),
        )
        .add(sheet_group)
        .add(parts_group);

    if options.skyline {
        doc = doc.add(svg_util::data_to_path(
            svg_util::skyline_data(sheet.skyline().segments()),
            &[
                ("fill", "none"),
                ("stroke", &*format!("{}", theme.skyline_color)),
                ("stroke-width", &*format!("{}", stroke_width)),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
            ],
        ));
    }

    doc.add(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Material, Part};
    use crate::geometry::{Rotation, oriented_dimensions};
    use crate::util::{NestingConfig, SheetSize};
    use crate::io::svg::svg_util::SvgLayoutTheme;

    #[test]
    fn svg_contains_every_part() {
        let config = NestingConfig {
            sheet_size: SheetSize {
                width: 1000.0,
                height: 500.0,
            },
            edge_margin: 5.0,
            ..NestingConfig::default()
        };
        let mut sheet = Sheet::new(0, &config);
        for (i, color) in ["#FF0000", "not-a-color"].into_iter().enumerate() {
            let part = Part::new(format!("part_{i}"), 200.0, 100.0).with_material(Material {
                id: "mdf".into(),
                name: "MDF 18mm".into(),
                color: color.into(),
            });
            let footprint = oriented_dimensions(part.width, part.height, Rotation::R0);
            let position = sheet.find_position(&footprint).unwrap();
            sheet.place(&part, footprint, position);
        }

        let options = SvgDrawOptions {
            skyline: true,
            ..SvgDrawOptions::default()
        };
        let svg = sheet_to_svg(&sheet, options, "test").to_string();
        assert!(svg.contains("part_0"));
        assert!(svg.contains("part_1"));
        assert!(svg.contains("#FF0000"));
        //unparseable material colors fall back to the theme
        let fallback = svg_util::SvgLayoutTheme::default().part_fill;
        assert!(svg.contains(&format!("{fallback}")));
    }

    #[test]
    fn gray_theme_ignores_material_colors() {
        let config = NestingConfig {
            sheet_size: SheetSize {
                width: 600.0,
                height: 400.0,
            },
            ..NestingConfig::default()
        };
        let mut sheet = Sheet::new(1, &config);
        let part = Part::new("shelf", 300.0, 100.0)
            .with_label("Shelf")
            .with_material(Material {
                color: "#FF0000".into(),
                ..Material::default()
            });
        let footprint = oriented_dimensions(part.width, part.height, Rotation::R90);
        let position = sheet.find_position(&footprint).unwrap();
        sheet.place(&part, footprint, position);

        let options = SvgDrawOptions {
            theme: SvgLayoutTheme::GRAY,
            material_colors: false,
            ..SvgDrawOptions::default()
        };
        let svg = sheet_to_svg(&sheet, options, "gray").to_string();
        assert!(svg.contains("Shelf"));
        assert!(svg.contains("sheet_1"));
        assert!(svg.contains(&format!("{}", SvgLayoutTheme::GRAY.part_fill)));
        assert!(!svg.contains("#FF0000"));
    }
}

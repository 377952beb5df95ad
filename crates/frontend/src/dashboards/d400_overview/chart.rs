//! Геометрия линейного графика в фиксированном viewBox

pub const VIEW_WIDTH: f64 = 600.0;
pub const VIEW_HEIGHT: f64 = 300.0;
/// Отступ под подписи осей
pub const PADDING: f64 = 40.0;
/// Число делений по оси Y (без нуля)
pub const Y_TICKS: usize = 5;

/// Верхняя граница оси Y: максимум, округлённый вверх до "круглого" шага
pub fn axis_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let step = magnitude / 2.0;
    (max / step).ceil() * step
}

/// Точки графика в координатах viewBox. Ноль внизу, `axis_max` вверху.
pub fn plot_points(values: &[f64]) -> Vec<(f64, f64)> {
    let top = axis_max(values);
    let inner_w = VIEW_WIDTH - 2.0 * PADDING;
    let inner_h = VIEW_HEIGHT - 2.0 * PADDING;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = PADDING + step * i as f64;
            let y = VIEW_HEIGHT - PADDING - (v / top) * inner_h;
            (x, y)
        })
        .collect()
}

/// Значение атрибута `points` для `<polyline>`
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Деления оси Y: (значение, координата y), снизу вверх
pub fn y_ticks(values: &[f64]) -> Vec<(f64, f64)> {
    let top = axis_max(values);
    let inner_h = VIEW_HEIGHT - 2.0 * PADDING;
    (0..=Y_TICKS)
        .map(|i| {
            let value = top * i as f64 / Y_TICKS as f64;
            (value, VIEW_HEIGHT - PADDING - inner_h * i as f64 / Y_TICKS as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_max_rounds_up() {
        assert_eq!(axis_max(&[3000.0, 8000.0]), 8000.0);
        assert_eq!(axis_max(&[1000.0, 2500.0]), 2500.0);
        assert_eq!(axis_max(&[45000.0]), 45000.0);
        assert_eq!(axis_max(&[47000.0]), 50000.0);
        assert_eq!(axis_max(&[7300.0]), 7500.0);
        assert_eq!(axis_max(&[]), 1.0);
    }

    #[test]
    fn test_points_span_the_plot_area() {
        let points = plot_points(&[0.0, 4000.0, 8000.0]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (PADDING, VIEW_HEIGHT - PADDING));
        assert_eq!(points[1].0, VIEW_WIDTH / 2.0);
        assert_eq!(points[2], (VIEW_WIDTH - PADDING, PADDING));
    }

    #[test]
    fn test_polyline_format() {
        assert_eq!(polyline(&[(40.0, 260.0), (560.0, 40.5)]), "40.0,260.0 560.0,40.5");
    }

    #[test]
    fn test_ticks_run_bottom_to_top() {
        let ticks = y_ticks(&[1000.0, 2500.0]);
        assert_eq!(ticks.len(), Y_TICKS + 1);
        assert_eq!(ticks[0], (0.0, VIEW_HEIGHT - PADDING));
        assert_eq!(ticks[Y_TICKS], (2500.0, PADDING));
    }
}

//! 송전 손실 모델 회귀 테스트.
use transmission_line_toolbox::line::{compute_power_loss, PowerLossInput};

fn assert_close(label: &str, actual: f64, expected: f64, abs_tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= abs_tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {abs_tol})"
    );
}

#[test]
fn reference_230kv_300mva_15ohm() {
    let res = compute_power_loss(&PowerLossInput {
        voltage_kv: 230.0,
        power_mva: 300.0,
        resistance_ohm: 15.0,
    });
    assert_close("current", res.current_a, 753.07, 0.01);
    assert_close("losses_mw", res.losses_mw, 25.52, 0.01);
    assert_close("losses_w", res.losses_w, res.losses_mw * 1e6, 1e-3);
    assert_close("efficiency", res.efficiency_pct, 91.49, 0.01);
    assert_close("losses_pct", res.losses_pct, 8.51, 0.01);
    assert_close("sum", res.efficiency_pct + res.losses_pct, 100.0, 1e-9);
}

#[test]
fn zero_resistance_is_lossless() {
    for power in [50.0, 300.0, 1000.0] {
        let res = compute_power_loss(&PowerLossInput {
            voltage_kv: 115.0,
            power_mva: power,
            resistance_ohm: 0.0,
        });
        assert_eq!(res.losses_mw, 0.0);
        assert_eq!(res.efficiency_pct, 100.0);
        assert!(res.current_a > 0.0);
    }
}

#[test]
fn non_positive_voltage_zeroes_everything() {
    for voltage in [0.0, -230.0] {
        let res = compute_power_loss(&PowerLossInput {
            voltage_kv: voltage,
            power_mva: 300.0,
            resistance_ohm: 15.0,
        });
        assert_eq!(res.current_a, 0.0);
        assert_eq!(res.losses_mw, 0.0);
        assert_eq!(res.losses_w, 0.0);
        assert_eq!(res.efficiency_pct, 0.0);
        assert_eq!(res.losses_pct, 0.0);
    }
}

#[test]
fn zero_power_reports_zero_efficiency() {
    let res = compute_power_loss(&PowerLossInput {
        voltage_kv: 230.0,
        power_mva: 0.0,
        resistance_ohm: 15.0,
    });
    assert_eq!(res.current_a, 0.0);
    assert_eq!(res.efficiency_pct, 0.0);
    assert_eq!(res.losses_pct, 0.0);
}

#[test]
fn losses_scale_with_square_of_current() {
    let base = compute_power_loss(&PowerLossInput {
        voltage_kv: 230.0,
        power_mva: 150.0,
        resistance_ohm: 10.0,
    });
    let doubled = compute_power_loss(&PowerLossInput {
        voltage_kv: 230.0,
        power_mva: 300.0,
        resistance_ohm: 10.0,
    });
    assert_close("ratio", doubled.losses_mw / base.losses_mw, 4.0, 1e-9);
}

use serde::Serialize;

use crate::rounding::round_to;

/// 압력 분포 점 개수(입구와 출구 포함)
pub const PROFILE_POINTS: usize = 20;

/// 배관 위치별 압력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressurePoint {
    /// 입구로부터의 거리 [mm]
    pub distance: f64,
    /// 해당 위치의 잔여 압력 [kPa]
    pub pressure: f64,
}

/// 입구(전체 압력강하)에서 출구(0)까지 선형으로 감소하는 압력 분포.
///
/// 거리는 소수점 1자리, 압력은 2자리로 반올림한다.
pub fn pressure_profile(total_pressure_kpa: f64, pipe_length_mm: f64) -> Vec<PressurePoint> {
    let segments = (PROFILE_POINTS - 1) as f64;
    (0..PROFILE_POINTS)
        .map(|i| {
            let distance = i as f64 * pipe_length_mm / segments;
            let relative_position = distance / pipe_length_mm;
            let pressure = total_pressure_kpa * (1.0 - relative_position);
            PressurePoint {
                distance: round_to(distance, 1),
                pressure: round_to(pressure, 2),
            }
        })
        .collect()
}

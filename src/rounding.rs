//! 결과 조립 단계에서만 사용하는 반올림 도우미.

/// `value`를 소수점 `decimals` 자리로 반올림한다.
///
/// 파이프라인 중간값에는 사용하지 않는다. 결과 구조체를 만들 때만 호출한다.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    // -0.0 표기를 피한다.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

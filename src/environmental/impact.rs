use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::agent_db::{self, BlowingAgent, BASELINE};
use crate::rounding::round_to;

/// 환경 영향 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImpactError {
    /// 참고 테이블에 없는 발포제. 기본값(HFC)으로 대체하지 않는다.
    #[error("unknown blowing agent: {0} (expected one of HFC, HCFC, Pentane, HFO, Ecomate)")]
    UnknownAgent(String),
    #[error("annual consumption must be a finite number (got {0})")]
    InvalidConsumption(f64),
}

/// 기준 발포제(Ecomate)로 전환했을 때의 연간 효과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentalImpactResult {
    /// 현재 사용 중인 발포제
    pub agent: BlowingAgent,
    /// CO₂ 환산 감축량 [t/년]
    pub co2_reduction: f64,
    /// 단열 성능 개선율 [%]
    pub thermal_improvement: f64,
    /// 비용 절감액 [통화/년]
    pub cost_savings: f64,
    /// ODP 환산 감축량 [kg/년], 반올림하지 않는다.
    pub odp_reduction: f64,
}

/// 발포제 이름과 연간 사용량 [kg]으로 환경 영향을 계산한다.
///
/// 이름은 대소문자를 구분하지 않으며, 모르는 이름은 항상 `UnknownAgent`로 실패한다.
pub fn estimate(
    agent_type: &str,
    annual_consumption: f64,
) -> Result<EnvironmentalImpactResult, ImpactError> {
    let agent = agent_type.parse::<BlowingAgent>().map_err(|e| {
        let name = e.0;
        warn!(agent = %name, "unknown blowing agent");
        ImpactError::UnknownAgent(name)
    })?;
    estimate_agent(agent, annual_consumption)
}

/// 발포제 종류로 환경 영향을 계산한다.
pub fn estimate_agent(
    agent: BlowingAgent,
    annual_consumption: f64,
) -> Result<EnvironmentalImpactResult, ImpactError> {
    if !annual_consumption.is_finite() {
        return Err(ImpactError::InvalidConsumption(annual_consumption));
    }
    let current = agent_db::profile(agent);
    let baseline = agent_db::profile(BASELINE);

    let co2_reduction = current.gwp * annual_consumption / 1000.0;
    let thermal_improvement = (current.lambda - baseline.lambda) / current.lambda * 100.0;
    let cost_savings = (current.cost - baseline.cost) * annual_consumption;
    let odp_reduction = current.odp * annual_consumption;

    debug!(
        %agent,
        annual_consumption,
        co2_reduction,
        thermal_improvement,
        cost_savings,
        odp_reduction,
        "environmental impact evaluated"
    );

    Ok(EnvironmentalImpactResult {
        agent,
        co2_reduction: round_to(co2_reduction, 2),
        thermal_improvement: round_to(thermal_improvement, 2),
        cost_savings: round_to(cost_savings, 2),
        odp_reduction,
    })
}

/// 기준 발포제를 제외한 모든 발포제의 환경 영향을 테이블 순서대로 계산한다.
pub fn compare_all(annual_consumption: f64) -> Result<Vec<EnvironmentalImpactResult>, ImpactError> {
    agent_db::agents()
        .iter()
        .filter(|p| p.agent != BASELINE)
        .map(|p| estimate_agent(p.agent, annual_consumption))
        .collect()
}

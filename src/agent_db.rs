//! 발포제(blowing agent) 환경/물성 참고 테이블.
//! 값은 비교용 참고치이며 실제 제품 데이터시트로 검증해야 한다.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// 비교 대상 발포제 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlowingAgent {
    #[serde(rename = "HFC")]
    Hfc,
    #[serde(rename = "HCFC")]
    Hcfc,
    Pentane,
    #[serde(rename = "HFO")]
    Hfo,
    Ecomate,
}

/// 비교 기준이 되는 발포제
pub const BASELINE: BlowingAgent = BlowingAgent::Ecomate;

impl BlowingAgent {
    pub fn name(&self) -> &'static str {
        match self {
            BlowingAgent::Hfc => "HFC",
            BlowingAgent::Hcfc => "HCFC",
            BlowingAgent::Pentane => "Pentane",
            BlowingAgent::Hfo => "HFO",
            BlowingAgent::Ecomate => "Ecomate",
        }
    }
}

impl fmt::Display for BlowingAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 테이블에 없는 발포제 이름.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAgentName(pub String);

impl FromStr for BlowingAgent {
    type Err = UnknownAgentName;

    /// 대소문자를 구분하지 않고 이름으로 찾는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        AGENTS
            .iter()
            .map(|p| p.agent)
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownAgentName(name.to_string()))
    }
}

/// 발포제 한 종의 참고 물성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlowingAgentProfile {
    pub agent: BlowingAgent,
    /// 지구온난화지수(GWP, CO₂=1)
    pub gwp: f64,
    /// 오존층파괴지수(ODP, CFC-11=1)
    pub odp: f64,
    /// 폼 열전도율 λ [W/(m·K)]
    pub lambda: f64,
    /// 단가 [통화/kg]
    pub cost: f64,
}

/// 전체 테이블. 순서는 고정이다.
pub fn agents() -> &'static [BlowingAgentProfile] {
    AGENTS
}

/// 발포제의 참고 물성을 가져온다.
pub fn profile(agent: BlowingAgent) -> &'static BlowingAgentProfile {
    match agent {
        BlowingAgent::Hfc => &AGENTS[0],
        BlowingAgent::Hcfc => &AGENTS[1],
        BlowingAgent::Pentane => &AGENTS[2],
        BlowingAgent::Hfo => &AGENTS[3],
        BlowingAgent::Ecomate => &AGENTS[4],
    }
}

const fn ap(
    agent: BlowingAgent,
    gwp: f64,
    odp: f64,
    lambda: f64,
    cost: f64,
) -> BlowingAgentProfile {
    BlowingAgentProfile {
        agent,
        gwp,
        odp,
        lambda,
        cost,
    }
}

const AGENTS: &[BlowingAgentProfile] = &[
    ap(BlowingAgent::Hfc, 1430.0, 0.0, 0.022, 4.50),
    ap(BlowingAgent::Hcfc, 725.0, 0.07, 0.023, 4.20),
    ap(BlowingAgent::Pentane, 5.0, 0.0, 0.024, 3.80),
    ap(BlowingAgent::Hfo, 1.0, 0.0, 0.022, 5.20),
    ap(BlowingAgent::Ecomate, 0.0, 0.0, 0.019, 3.95),
];

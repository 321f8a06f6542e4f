use super::domain::{DisclosureItem, ItemCode, Standard};
use serde::Serialize;

/// Bilingual improvement recommendation for a single disclosure item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub en: String,
    pub ko: String,
}

impl Advice {
    fn from_static((en, ko): (&str, &str)) -> Self {
        Self {
            en: en.to_string(),
            ko: ko.to_string(),
        }
    }

    pub fn is_commendation(&self) -> bool {
        self.en == COMMENDATION.0
    }
}

const COMMENDATION: (&str, &str) = (
    "Excellent performance! Maintain current practices and share best practices with peers.",
    "우수한 성과입니다! 현재 관행을 유지하고 동료들과 모범 사례를 공유하세요.",
);

/// Returns advice for closing the item's gap to its benchmark. Items that
/// already meet the benchmark all receive the same commendation.
pub fn advise(item: &DisclosureItem, standard: Standard) -> Advice {
    let gap = item.gap();
    if gap <= 0.0 {
        return Advice::from_static(COMMENDATION);
    }

    match item.code().filter(|code| code.category() == item.category) {
        Some(code) => Advice::from_static(curated(code)),
        None => generic(gap, standard),
    }
}

fn generic(gap: f64, standard: Standard) -> Advice {
    let points = gap.round() as i64;
    let standard = standard.name();
    Advice {
        en: format!(
            "Improve by {points} points to meet {standard} standards. Focus on gap analysis and action planning."
        ),
        ko: format!(
            "{standard} 기준을 충족하기 위해 {points}점을 개선하세요. 격차 분석 및 실행 계획에 집중하세요."
        ),
    }
}

fn curated(code: ItemCode) -> (&'static str, &'static str) {
    match code {
        ItemCode::E01 => (
            "Implement energy-efficient technologies and set measurable emission reduction targets.",
            "에너지 효율적인 기술을 도입하고 측정 가능한 배출 감축 목표를 설정하세요.",
        ),
        ItemCode::E02 => (
            "Conduct energy audit and upgrade to LED lighting and efficient HVAC systems.",
            "에너지 감사를 수행하고 LED 조명 및 효율적인 HVAC 시스템으로 업그레이드하세요.",
        ),
        ItemCode::E03 => (
            "Install water monitoring systems and implement recycling programs.",
            "물 모니터링 시스템을 설치하고 재활용 프로그램을 구현하세요.",
        ),
        ItemCode::E04 => (
            "Establish waste segregation protocols and partner with recycling vendors.",
            "폐기물 분리 프로토콜을 수립하고 재활용 업체와 파트너십을 맺으세요.",
        ),
        ItemCode::S01 => (
            "Develop comprehensive safety training programs and conduct regular workplace assessments.",
            "포괄적인 안전 교육 프로그램을 개발하고 정기적인 작업장 평가를 실시하세요.",
        ),
        ItemCode::S02 => (
            "Create inclusive hiring policies and establish diversity training initiatives.",
            "포용적인 채용 정책을 만들고 다양성 교육 이니셔티브를 수립하세요.",
        ),
        ItemCode::S03 => (
            "Review labor contracts and ensure compliance with international labor standards.",
            "노동 계약을 검토하고 국제 노동 기준 준수를 보장하세요.",
        ),
        ItemCode::S04 => (
            "Initiate local community partnerships and volunteer programs for employees.",
            "지역 사회 파트너십을 시작하고 직원을 위한 자원봉사 프로그램을 운영하세요.",
        ),
        ItemCode::G01 => (
            "Appoint independent board members and establish clear governance committees.",
            "독립적인 이사회 구성원을 임명하고 명확한 거버넌스 위원회를 설립하세요.",
        ),
        ItemCode::G02 => (
            "Implement ethics hotline and provide regular compliance training to all staff.",
            "윤리 핫라인을 구현하고 모든 직원에게 정기적인 준법 교육을 제공하세요.",
        ),
        ItemCode::G03 => (
            "Develop enterprise risk management framework and conduct quarterly risk assessments.",
            "기업 리스크 관리 프레임워크를 개발하고 분기별 리스크 평가를 실시하세요.",
        ),
        ItemCode::G04 => (
            "Publish annual sustainability reports and enhance stakeholder communication channels.",
            "연간 지속가능성 보고서를 발행하고 이해관계자 커뮤니케이션 채널을 강화하세요.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::{Category, Grade};
    use crate::scoring::template::DisclosureTemplate;
    use std::collections::HashSet;

    fn item(number: &str, category: Category, company: f64, standard: f64) -> DisclosureItem {
        DisclosureItem::new(number, number, category, standard, 100.0).with_company_value(company)
    }

    #[test]
    fn meeting_the_benchmark_earns_the_commendation_in_every_category() {
        for (number, category) in [
            ("E-01", Category::E),
            ("S-02", Category::S),
            ("G-03", Category::G),
            ("X-99", Category::G),
        ] {
            for company in [60.0, 95.0] {
                let advice = advise(&item(number, category, company, 60.0), Standard::Esrs);
                assert!(advice.is_commendation(), "{number} at {company}");
            }
        }
    }

    #[test]
    fn strong_item_grades_a_plus_and_is_commended() {
        let strong = item("E-02", Category::E, 95.0, 60.0);
        assert_eq!(strong.grade(), Grade::APlus);
        assert!(advise(&strong, Standard::KEsg).is_commendation());
    }

    #[test]
    fn weak_item_gets_curated_advice() {
        let weak = item("E-01", Category::E, 40.0, 60.0);
        assert_eq!(weak.grade(), Grade::F);
        assert_eq!(weak.gap(), 20.0);

        let advice = advise(&weak, Standard::KEsg);
        assert!(!advice.is_commendation());
        assert!(advice.en.contains("emission reduction targets"));
        assert!(advice.ko.contains("배출 감축"));
    }

    #[test]
    fn unknown_item_falls_back_to_generic_guidance() {
        let custom = item("E-07", Category::E, 40.0, 62.6);
        let advice = advise(&custom, Standard::Esrs);
        assert_eq!(
            advice.en,
            "Improve by 23 points to meet ESRS standards. Focus on gap analysis and action planning."
        );
        assert!(advice.ko.starts_with("ESRS 기준을 충족하기 위해 23점을"));
    }

    #[test]
    fn mismatched_category_uses_fallback() {
        let mislabeled = item("G-01", Category::S, 10.0, 50.0);
        let advice = advise(&mislabeled, Standard::KEsg);
        assert!(advice.en.starts_with("Improve by 40 points to meet K-ESG"));
    }

    #[test]
    fn every_template_item_has_its_own_curated_advice() {
        let items = DisclosureTemplate::standard(Standard::Esrs).items();

        let texts: HashSet<String> = items
            .iter()
            .map(|item| advise(item, Standard::Esrs))
            .inspect(|advice| {
                assert!(!advice.is_commendation());
                assert!(!advice.en.starts_with("Improve by"));
            })
            .map(|advice| advice.en)
            .collect();

        assert_eq!(texts.len(), items.len());
    }
}

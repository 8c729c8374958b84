use crate::domain::closed_enum::closed_string_enum;

closed_string_enum! {
    /// 近期條件的回溯時間範圍
    pub enum Duration {
        /// 過去 24 小時
        Hr24 => "HR_24",
        Day7 => "DAY_7",
        Day14 => "DAY_14",
        Day30 => "DAY_30",
    }
}

closed_string_enum! {
    /// 事件過濾器比對系統事件或應用程式自訂的端點事件
    pub enum FilterType {
        System => "SYSTEM",
        Endpoint => "ENDPOINT",
    }
}

closed_string_enum! {
    /// 活動發送頻率；`Event` 由排程的事件過濾器觸發，而非依時間
    pub enum Frequency {
        Once => "ONCE",
        Hourly => "HOURLY",
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
        Event => "EVENT",
    }
}

closed_string_enum! {
    /// 近期條件要求的端點活躍狀態
    pub enum RecencyType {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

closed_string_enum! {
    /// 包含或排除符合集合條件的端點
    pub enum DimensionType {
        Inclusive => "INCLUSIVE",
        Exclusive => "EXCLUSIVE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::closed_enum::ClosedStringEnum;

    fn assert_round_trip<E: ClosedStringEnum + std::fmt::Debug>() {
        for variant in E::VARIANTS {
            let wire = variant.as_wire_value();
            assert_eq!(E::from_value(wire).unwrap(), *variant);
            assert_eq!(E::from_value(wire).unwrap().as_wire_value(), wire);
        }
    }

    #[test]
    fn test_every_variant_round_trips() {
        assert_round_trip::<Duration>();
        assert_round_trip::<FilterType>();
        assert_round_trip::<Frequency>();
        assert_round_trip::<RecencyType>();
        assert_round_trip::<DimensionType>();
    }

    #[test]
    fn test_value_sets() {
        assert_eq!(Duration::wire_values(), vec!["HR_24", "DAY_7", "DAY_14", "DAY_30"]);
        assert_eq!(FilterType::wire_values(), vec!["SYSTEM", "ENDPOINT"]);
        assert_eq!(
            Frequency::wire_values(),
            vec!["ONCE", "HOURLY", "DAILY", "WEEKLY", "MONTHLY", "EVENT"]
        );
        assert_eq!(RecencyType::wire_values(), vec!["ACTIVE", "INACTIVE"]);
        assert_eq!(DimensionType::wire_values(), vec!["INCLUSIVE", "EXCLUSIVE"]);
    }

    #[test]
    fn test_duration_day_7() {
        let duration = Duration::from_value("DAY_7").unwrap();
        assert_eq!(duration, Duration::Day7);
        assert_eq!(duration.as_wire_value(), "DAY_7");
    }

    #[test]
    fn test_case_sensitive() {
        assert!(Duration::from_value("hr_24").is_err());
        assert!(Frequency::from_value("Event").is_err());
        assert!(RecencyType::from_value("active").is_err());
    }

    #[test]
    fn test_frequency_rejects_yearly() {
        let err = Frequency::from_value("YEARLY").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("YEARLY"));
    }

    #[test]
    fn test_recency_type_rejects_empty() {
        assert!(RecencyType::from_value("").unwrap_err().is_invalid_argument());
    }
}

// ABOUTME: Body Mass Index classification into five ordered categories
// ABOUTME: Ascending threshold scan over the fixed 18.5/25/30/35 boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use vitals_core::constants::bmi::{NORMAL_BELOW, OBESE_BELOW, OVERWEIGHT_BELOW, UNDERWEIGHT_BELOW};

/// BMI category, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// 30 <= BMI < 35
    Obese,
    /// BMI >= 35
    ExtremelyObese,
}

impl BmiCategory {
    /// Classify a BMI value
    ///
    /// Each lower bound is inclusive. Any value that fails every comparison,
    /// NaN included, lands in [`Self::ExtremelyObese`].
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < NORMAL_BELOW {
            Self::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Self::Overweight
        } else if bmi < OBESE_BELOW {
            Self::Obese
        } else {
            Self::ExtremelyObese
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
            Self::ExtremelyObese => "Extremely Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category label for a BMI value
#[must_use]
pub fn classify_bmi(bmi: f64) -> &'static str {
    BmiCategory::from_bmi(bmi).label()
}

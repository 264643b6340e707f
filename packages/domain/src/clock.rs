//! # Clock（時刻プロバイダ）
//!
//! Todo の作成日時（`create_at`）を決める時刻源。
//! ユースケース層は `Utc::now()` を直接呼ばず、このトレイト経由で時刻を得る。
//! テストでは [`FixedClock`] を注入して作成日時を固定する。

use chrono::{DateTime, Utc};

/// 現在時刻（UTC）を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;
}

/// システム時刻を返す実装
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now()
   }
}

/// 常に同じ時刻を返すテスト用実装
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
   now: DateTime<Utc>,
}

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self { now }
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.now
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_system_clock_は呼び出し時点のutc時刻を返す() {
      let before = Utc::now();
      let result = SystemClock.now();
      let after = Utc::now();

      assert!(before <= result && result <= after);
   }

   #[test]
   fn test_fixed_clock_は何度呼んでも注入した時刻を返す() {
      let fixed = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
      let clock = FixedClock::new(fixed);

      assert_eq!(clock.now(), fixed);
      assert_eq!(clock.now(), fixed);
   }
}

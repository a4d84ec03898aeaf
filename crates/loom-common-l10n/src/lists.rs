// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Selection lists for enumerations.
//!
//! Every builder walks the enumeration in declaration order and never emits
//! sentinel members such as `UserType::All`.

use loom_l10n_core::{
	ApiProviderId, DayOfWeek, Enumeration, FlagSet, OrgType, SysLanguage, TextValue,
	TicketNoRestartType, TicketStatus, UserRoles, UserStatus, UserType,
};

use crate::key::TextKey;
use crate::service::LocalizationService;

/// Roles offered by [`LocalizationService::list_user_roles`].
const ORG_ROLES: [UserRoles; 2] = [UserRoles::OrgAdmin, UserRoles::OrgOperator];

impl LocalizationService {
	fn build_list<E>(&self, language: SysLanguage, mut keep: impl FnMut(E) -> bool) -> Vec<TextValue<E>>
	where
		E: Enumeration,
		TextKey: From<E>,
	{
		E::members()
			.iter()
			.copied()
			.filter(|member| !member.is_sentinel() && keep(*member))
			.map(|member| TextValue::from_member(member, self.type2text(member, language)))
			.collect()
	}

	pub fn list_languages(&self, language: SysLanguage) -> Vec<TextValue<SysLanguage>> {
		self.build_list(language, |_| true)
	}

	/// API providers labelled with their member names; these are brand names
	/// and are not translated.
	pub fn list_api_providers(&self) -> Vec<TextValue<ApiProviderId>> {
		ApiProviderId::members()
			.iter()
			.map(|&provider| TextValue::from_member(provider, provider.name()))
			.collect()
	}

	/// User types intersecting `include` (every type when `None`) and not
	/// intersecting `exclude`.
	pub fn list_user_types(
		&self,
		language: SysLanguage,
		include: Option<FlagSet<UserType>>,
		exclude: Option<FlagSet<UserType>>,
	) -> Vec<TextValue<UserType>> {
		let include = include.unwrap_or_else(|| FlagSet::from(UserType::All));
		self.build_list(language, |t| {
			include.intersects(t) && !exclude.is_some_and(|ex| ex.intersects(t))
		})
	}

	/// The roles an organization can assign: administrator and operator.
	pub fn list_user_roles(&self, language: SysLanguage) -> Vec<TextValue<UserRoles>> {
		self.list_user_roles_filtered(language, Some(ORG_ROLES.into_iter().collect()), None)
	}

	/// Roles intersecting `include` (every role when `None`) and not
	/// intersecting `exclude`.
	pub fn list_user_roles_filtered(
		&self,
		language: SysLanguage,
		include: Option<FlagSet<UserRoles>>,
		exclude: Option<FlagSet<UserRoles>>,
	) -> Vec<TextValue<UserRoles>> {
		let include = include.unwrap_or_else(|| FlagSet::from(UserRoles::All));
		self.build_list(language, |role| {
			include.intersects(role) && !exclude.is_some_and(|ex| ex.intersects(role))
		})
	}

	pub fn list_org_types(
		&self,
		language: SysLanguage,
		exclude: Option<FlagSet<OrgType>>,
	) -> Vec<TextValue<OrgType>> {
		self.build_list(language, |t| !exclude.is_some_and(|ex| ex.intersects(t)))
	}

	pub fn list_user_statuses(&self, language: SysLanguage) -> Vec<TextValue<UserStatus>> {
		self.build_list(language, |_| true)
	}

	/// All seven days. Unlike the other lists, `tag` holds the short day
	/// name rather than the member.
	pub fn list_days_of_week(&self, language: SysLanguage) -> Vec<TextValue<String>> {
		DayOfWeek::members()
			.iter()
			.map(|&day| {
				TextValue::new(
					day.value().to_string(),
					self.type2text(day, language),
					self.type2text(TextKey::DayOfWeekShort(day), language),
				)
			})
			.collect()
	}

	pub fn list_ticket_restart_types(
		&self,
		language: SysLanguage,
		exclude: Option<FlagSet<TicketNoRestartType>>,
	) -> Vec<TextValue<TicketNoRestartType>> {
		self.build_list(language, |t| !exclude.is_some_and(|ex| ex.intersects(t)))
	}

	/// Ticket statuses a user can pick; `New` is only ever set by the system.
	pub fn list_ticket_statuses(&self, language: SysLanguage) -> Vec<TextValue<TicketStatus>> {
		self.list_ticket_statuses_excluding(language, &[TicketStatus::New])
	}

	pub fn list_ticket_statuses_excluding(
		&self,
		language: SysLanguage,
		exclude: &[TicketStatus],
	) -> Vec<TextValue<TicketStatus>> {
		self.build_list(language, |status| !exclude.contains(&status))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn service() -> LocalizationService {
		LocalizationService::builtin()
	}

	fn tags<T: Copy>(items: &[TextValue<T>]) -> Vec<T> {
		items.iter().map(|item| item.tag).collect()
	}

	#[test]
	fn test_list_languages() {
		let items = service().list_languages(SysLanguage::Vietnamese);
		assert_eq!(
			tags(&items),
			[SysLanguage::English, SysLanguage::Vietnamese, SysLanguage::Japanese]
		);
		assert_eq!(items[0].value, "1");
		assert_eq!(items[0].text, "Tiếng Anh");
	}

	#[test]
	fn test_list_api_providers_uses_names() {
		let items = service().list_api_providers();
		assert_eq!(items.len(), ApiProviderId::members().len());
		assert_eq!(items[1].value, "1");
		assert_eq!(items[1].text, "Google");
		assert_eq!(items[1].tag, ApiProviderId::Google);
	}

	#[test]
	fn test_list_user_types_default_skips_sentinel() {
		let items = service().list_user_types(SysLanguage::English, None, None);
		assert_eq!(
			tags(&items),
			[
				UserType::Guest,
				UserType::Member,
				UserType::Operator,
				UserType::Administrator
			]
		);
		assert_eq!(items[3].value, "8");
		assert_eq!(items[3].text, "Administrator");
	}

	#[test]
	fn test_list_user_types_filters() {
		let include = FlagSet::from(UserType::Operator) | UserType::Administrator | UserType::Guest;
		let exclude = FlagSet::from(UserType::Guest);
		let items = service().list_user_types(SysLanguage::English, Some(include), Some(exclude));
		assert_eq!(tags(&items), [UserType::Operator, UserType::Administrator]);
	}

	#[test]
	fn test_list_user_roles_default() {
		let items = service().list_user_roles(SysLanguage::Vietnamese);
		assert_eq!(tags(&items), [UserRoles::OrgOperator, UserRoles::OrgAdmin]);
		assert_eq!(items[1].text, "Quản trị tổ chức");
	}

	#[test]
	fn test_list_user_roles_filtered() {
		let all = service().list_user_roles_filtered(SysLanguage::English, None, None);
		assert_eq!(all.len(), 4);
		let without_sys = service().list_user_roles_filtered(
			SysLanguage::English,
			None,
			Some(FlagSet::from(UserRoles::SysAdmin)),
		);
		assert!(without_sys.iter().all(|item| item.tag != UserRoles::SysAdmin));
		assert_eq!(without_sys.len(), 3);
	}

	#[test]
	fn test_list_org_types() {
		let items = service().list_org_types(SysLanguage::English, None);
		assert_eq!(items.len(), OrgType::members().len());
		let items = service().list_org_types(
			SysLanguage::English,
			Some(FlagSet::from(OrgType::Banking) | OrgType::Education),
		);
		assert_eq!(
			tags(&items),
			[OrgType::Retail, OrgType::Healthcare, OrgType::PublicService]
		);
		assert_eq!(items[2].text, "Public service");
	}

	#[test]
	fn test_list_user_statuses() {
		let items = service().list_user_statuses(SysLanguage::Japanese);
		assert_eq!(items.len(), 4);
		assert_eq!(items[0].value, "0");
		assert_eq!(items[1].text, "有効");
	}

	#[test]
	fn test_list_days_of_week_tags_short_names() {
		let items = service().list_days_of_week(SysLanguage::English);
		assert_eq!(items.len(), 7);
		assert!(items.iter().all(|item| !item.text.is_empty()));
		assert_eq!(items[0].value, "1");
		assert_eq!(items[0].text, "Monday");
		assert_eq!(items[0].tag, "Mon");
		assert_eq!(items[6].value, "64");
		assert_eq!(items[6].tag, "Sun");
	}

	#[test]
	fn test_list_json_payload() {
		let l10n = service();
		let statuses = serde_json::to_value(l10n.list_ticket_statuses(SysLanguage::English)).unwrap();
		assert_eq!(
			statuses[0],
			serde_json::json!({ "value": "1", "text": "Waiting", "tag": "Waiting" })
		);

		let days = serde_json::to_value(l10n.list_days_of_week(SysLanguage::English)).unwrap();
		assert_eq!(
			days[0],
			serde_json::json!({ "value": "1", "text": "Monday", "tag": "Mon" })
		);
	}

	#[test]
	fn test_list_ticket_restart_types() {
		let items = service().list_ticket_restart_types(
			SysLanguage::Vietnamese,
			Some(FlagSet::from(TicketNoRestartType::Never)),
		);
		assert_eq!(items.len(), 4);
		assert_eq!(items[0].tag, TicketNoRestartType::Daily);
		assert_eq!(items[0].text, "Hằng ngày");
	}

	#[test]
	fn test_list_ticket_statuses_hides_new() {
		let items = service().list_ticket_statuses(SysLanguage::English);
		assert!(items.iter().all(|item| item.tag != TicketStatus::New));
		assert_eq!(items.len(), TicketStatus::members().len() - 1);

		let items = service().list_ticket_statuses_excluding(SysLanguage::English, &[]);
		assert_eq!(items[0].tag, TicketStatus::New);
		let items = service().list_ticket_statuses_excluding(
			SysLanguage::English,
			&[TicketStatus::Cancelled, TicketStatus::Skipped],
		);
		assert_eq!(items.len(), TicketStatus::members().len() - 2);
	}

	#[test]
	fn test_missing_translation_uses_sentinel() {
		let store = crate::resource::MemoryStore::new().with_culture("", [("Guest", "Guest")]);
		let items = LocalizationService::new(store).list_user_types(SysLanguage::English, None, None);
		assert_eq!(items[0].text, "Guest");
		assert_eq!(items[1].text, "NAMember");
	}

	proptest! {
		/// For any masks: no sentinel, every item intersects the include
		/// mask, none intersects the exclude mask.
		#[test]
		fn user_type_filters_hold(include in any::<i16>(), exclude in proptest::option::of(any::<i16>())) {
			let service = service();
			let include = FlagSet::<UserType>::from_bits(include);
			let exclude = exclude.map(FlagSet::<UserType>::from_bits);
			for item in service.list_user_types(SysLanguage::English, Some(include), exclude) {
				prop_assert_ne!(item.tag, UserType::All);
				prop_assert!(include.intersects(item.tag));
				prop_assert!(!exclude.is_some_and(|ex| ex.intersects(item.tag)));
				prop_assert_eq!(item.value, item.tag.value().to_string());
			}
		}

		#[test]
		fn user_role_lists_never_contain_sentinel(include in proptest::option::of(any::<i16>())) {
			let include = include.map(FlagSet::<UserRoles>::from_bits);
			let items = service().list_user_roles_filtered(SysLanguage::Vietnamese, include, None);
			prop_assert!(items.iter().all(|item| item.tag != UserRoles::All));
		}
	}
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! VPC API (`2017-03-12`) error codes.

vpc_error_codes! {
    AddressQuotaLimitExceeded => ADDRESSQUOTALIMITEXCEEDED = "AddressQuotaLimitExceeded",
        "账户配额不足，每个腾讯云账户每个地域下最多可创建 20 个 EIP。";
    AddressQuotaLimitExceededDailyAllocate => ADDRESSQUOTALIMITEXCEEDED_DAILYALLOCATE = "AddressQuotaLimitExceeded.DailyAllocate",
        "申购次数不足，每个腾讯云账户每个地域每天申购次数为配额数*2 次。";
    AuthFailure => AUTHFAILURE = "AuthFailure",
        "CAM签名/鉴权错误。";
    FailedOperationAddressEniInfoNotFound => FAILEDOPERATION_ADDRESSENIINFONOTFOUND = "FailedOperation.AddressEniInfoNotFound",
        "地址没有弹性网卡信息。";
    FailedOperationBalanceInsufficient => FAILEDOPERATION_BALANCEINSUFFICIENT = "FailedOperation.BalanceInsufficient",
        "账户余额不足。";
    FailedOperationInvalidRegion => FAILEDOPERATION_INVALIDREGION = "FailedOperation.InvalidRegion",
        "不支持的地域。";
    FailedOperationMasterEniNotFound => FAILEDOPERATION_MASTERENINOTFOUND = "FailedOperation.MasterEniNotFound",
        "未找到实例的主网卡。";
    FailedOperationNetDetectTimeOut => FAILEDOPERATION_NETDETECTTIMEOUT = "FailedOperation.NetDetectTimeOut",
        "网络探测超时，请稍后重试。";
    FailedOperationTaskFailed => FAILEDOPERATION_TASKFAILED = "FailedOperation.TaskFailed",
        "任务执行失败。";
    InternalError => INTERNALERROR = "InternalError",
        "内部错误。";
    InternalErrorCreateCkafkaRouteError => INTERNALERROR_CREATECKAFKAROUTEERROR = "InternalError.CreateCkafkaRouteError",
        "创建Ckafka路由失败，请稍后重试。";
    InternalServerError => INTERNALSERVERERROR = "InternalServerError",
        "操作内部错误。";
    InvalidAccountNotSupported => INVALIDACCOUNT_NOTSUPPORTED = "InvalidAccount.NotSupported",
        "不支持此账户。";
    InvalidAddressIdBlocked => INVALIDADDRESSID_BLOCKED = "InvalidAddressId.Blocked",
        "指定EIP处于被封堵状态。当EIP处于封堵状态的时候是不能够进行绑定操作的，需要先进行解封。";
    InvalidAddressIdNotFound => INVALIDADDRESSID_NOTFOUND = "InvalidAddressId.NotFound",
        " 指定的EIP不存在。";
    InvalidAddressIdStateInArrears => INVALIDADDRESSIDSTATE_INARREARS = "InvalidAddressIdState.InArrears",
        "指定EIP处于欠费状态。";
    InvalidAddressIdStatusNotPermit => INVALIDADDRESSIDSTATUS_NOTPERMIT = "InvalidAddressIdStatus.NotPermit",
        "指定 EIP 当前状态不能进行绑定操作。只有 EIP 的状态是 UNBIND 时才能进行绑定操作。";
    InvalidAddressState => INVALIDADDRESSSTATE = "InvalidAddressState",
        "指定EIP的当前状态不允许进行该操作。";
    InvalidInstanceNotSupported => INVALIDINSTANCE_NOTSUPPORTED = "InvalidInstance.NotSupported",
        "不被支持的实例。";
    InvalidInstanceIdAlreadyBindEip => INVALIDINSTANCEID_ALREADYBINDEIP = "InvalidInstanceId.AlreadyBindEip",
        "指定实例已经绑定了EIP。需先解绑当前的EIP才能再次进行绑定操作。";
    InvalidInstanceIdNotFound => INVALIDINSTANCEID_NOTFOUND = "InvalidInstanceId.NotFound",
        "无效实例ID。指定的实例ID不存在。";
    InvalidNetworkInterfaceIdNotFound => INVALIDNETWORKINTERFACEID_NOTFOUND = "InvalidNetworkInterfaceId.NotFound",
        "指定 NetworkInterfaceId 不存在或指定的PrivateIpAddress不在NetworkInterfaceId上。";
    InvalidParameter => INVALIDPARAMETER = "InvalidParameter",
        "参数错误。";
    InvalidParameterCoexist => INVALIDPARAMETER_COEXIST = "InvalidParameter.Coexist",
        "参数不支持同时指定。";
    InvalidParameterFilterInvalidKey => INVALIDPARAMETER_FILTERINVALIDKEY = "InvalidParameter.FilterInvalidKey",
        "指定过滤条件不存在。";
    InvalidParameterFilterNotDict => INVALIDPARAMETER_FILTERNOTDICT = "InvalidParameter.FilterNotDict",
        "指定过滤条件不是键值对。";
    InvalidParameterFilterValuesNotList => INVALIDPARAMETER_FILTERVALUESNOTLIST = "InvalidParameter.FilterValuesNotList",
        "指定过滤选项值不是列表。";
    InvalidParameterInvalidFilter => INVALIDPARAMETER_INVALIDFILTER = "InvalidParameter.InvalidFilter",
        "该过滤规则不合法。";
    InvalidParameterNextHopMismatch => INVALIDPARAMETER_NEXTHOPMISMATCH = "InvalidParameter.NextHopMismatch",
        "下一跳类型与下一跳网关不匹配。";
    InvalidParameterVpgHaGroupNotFound => INVALIDPARAMETER_VPGHAGROUPNOTFOUND = "InvalidParameter.VpgHaGroupNotFound",
        "专线网关跨可用区容灾组不存在。";
    InvalidParameterConflict => INVALIDPARAMETERCONFLICT = "InvalidParameterConflict",
        "指定的两个参数冲突，不能同时存在。 EIP只能绑定在实例上或指定网卡的指定内网 IP 上。";
    InvalidParameterValue => INVALIDPARAMETERVALUE = "InvalidParameterValue",
        "参数取值错误。";
    InvalidParameterValueAddressAttacked => INVALIDPARAMETERVALUE_ADDRESSATTACKED = "InvalidParameterValue.AddressAttacked",
        "被攻击的IP地址。";
    InvalidParameterValueAddressIdMalformed => INVALIDPARAMETERVALUE_ADDRESSIDMALFORMED = "InvalidParameterValue.AddressIdMalformed",
        "该地址ID不合法。";
    InvalidParameterValueAddressInternetChargeTypeConflict => INVALIDPARAMETERVALUE_ADDRESSINTERNETCHARGETYPECONFLICT = "InvalidParameterValue.AddressInternetChargeTypeConflict",
        "该地址计费方式与其他地址冲突。";
    InvalidParameterValueAddressIpNotAvailable => INVALIDPARAMETERVALUE_ADDRESSIPNOTAVAILABLE = "InvalidParameterValue.AddressIpNotAvailable",
        "该IP地址现在不可用。";
    InvalidParameterValueAddressIpNotFound => INVALIDPARAMETERVALUE_ADDRESSIPNOTFOUND = "InvalidParameterValue.AddressIpNotFound",
        "IP地址未找到。";
    InvalidParameterValueAddressIpNotInVpc => INVALIDPARAMETERVALUE_ADDRESSIPNOTINVPC = "InvalidParameterValue.AddressIpNotInVpc",
        "VPC中不存在此IP地址。";
    InvalidParameterValueAddressIpNotPublic => INVALIDPARAMETERVALUE_ADDRESSIPNOTPUBLIC = "InvalidParameterValue.AddressIpNotPublic",
        "此IPv6地址未发布。";
    InvalidParameterValueAddressNotApplicable => INVALIDPARAMETERVALUE_ADDRESSNOTAPPLICABLE = "InvalidParameterValue.AddressNotApplicable",
        "该地址不可与此实例申请。";
    InvalidParameterValueAddressNotCalcIP => INVALIDPARAMETERVALUE_ADDRESSNOTCALCIP = "InvalidParameterValue.AddressNotCalcIP",
        "该地址不是CalcIP。";
    InvalidParameterValueAddressNotEIP => INVALIDPARAMETERVALUE_ADDRESSNOTEIP = "InvalidParameterValue.AddressNotEIP",
        "该地址不是EIP。";
    InvalidParameterValueAddressNotFound => INVALIDPARAMETERVALUE_ADDRESSNOTFOUND = "InvalidParameterValue.AddressNotFound",
        "未找到该地址。";
    InvalidParameterValueAddressPublished => INVALIDPARAMETERVALUE_ADDRESSPUBLISHED = "InvalidParameterValue.AddressPublished",
        "该IPv6地址已经发布。";
    InvalidParameterValueBandwidthOutOfRange => INVALIDPARAMETERVALUE_BANDWIDTHOUTOFRANGE = "InvalidParameterValue.BandwidthOutOfRange",
        "带宽超出限制。";
    InvalidParameterValueBandwidthPackageIdMalformed => INVALIDPARAMETERVALUE_BANDWIDTHPACKAGEIDMALFORMED = "InvalidParameterValue.BandwidthPackageIdMalformed",
        "带宽包ID不正确。";
    InvalidParameterValueBandwidthPackageInUse => INVALIDPARAMETERVALUE_BANDWIDTHPACKAGEINUSE = "InvalidParameterValue.BandwidthPackageInUse",
        "该带宽包正在被使用。";
    InvalidParameterValueBandwidthPackageNotFound => INVALIDPARAMETERVALUE_BANDWIDTHPACKAGENOTFOUND = "InvalidParameterValue.BandwidthPackageNotFound",
        "未查询到该带宽包。";
    InvalidParameterValueBandwidthTooSmall => INVALIDPARAMETERVALUE_BANDWIDTHTOOSMALL = "InvalidParameterValue.BandwidthTooSmall",
        "选择带宽低于可允许的最小范围。";
    InvalidParameterValueCcnAttachBmvpcLimitExceeded => INVALIDPARAMETERVALUE_CCNATTACHBMVPCLIMITEXCEEDED = "InvalidParameterValue.CcnAttachBmvpcLimitExceeded",
        "指定云联网关联黑石私有网络数量达到上限。";
    InvalidParameterValueCidrNotInPeerVpc => INVALIDPARAMETERVALUE_CIDRNOTINPEERVPC = "InvalidParameterValue.CidrNotInPeerVpc",
        "目的网段不在对端VPC的CIDR范围内。";
    InvalidParameterValueCidrNotInSslVpnVpc => INVALIDPARAMETERVALUE_CIDRNOTINSSLVPNVPC = "InvalidParameterValue.CidrNotInSslVpnVpc",
        "指定CIDR不在SSL-VPN所属私有网络CIDR内。";
    InvalidParameterValueCombination => INVALIDPARAMETERVALUE_COMBINATION = "InvalidParameterValue.Combination",
        "非法入参组合。";
    InvalidParameterValueDuplicate => INVALIDPARAMETERVALUE_DUPLICATE = "InvalidParameterValue.Duplicate",
        "入参重复。";
    InvalidParameterValueDuplicatePara => INVALIDPARAMETERVALUE_DUPLICATEPARA = "InvalidParameterValue.DuplicatePara",
        "参数值存在重复。";
    InvalidParameterValueEIPBrandWidthOutInvalid => INVALIDPARAMETERVALUE_EIPBRANDWIDTHOUTINVALID = "InvalidParameterValue.EIPBrandWidthOutInvalid",
        "值超过上限。";
    InvalidParameterValueEmpty => INVALIDPARAMETERVALUE_EMPTY = "InvalidParameterValue.Empty",
        "缺少参数。";
    InvalidParameterValueIPv6RuleNotChange => INVALIDPARAMETERVALUE_IPV6RULENOTCHANGE = "InvalidParameterValue.IPv6RuleNotChange",
        "IPv6规则没有更改。";
    InvalidParameterValueInconsistentInstanceInternetChargeType => INVALIDPARAMETERVALUE_INCONSISTENTINSTANCEINTERNETCHARGETYPE = "InvalidParameterValue.InconsistentInstanceInternetChargeType",
        "该实例的计费方式与其他实例不同。";
    InvalidParameterValueInstanceDoesNotSupportAnycast => INVALIDPARAMETERVALUE_INSTANCEDOESNOTSUPPORTANYCAST = "InvalidParameterValue.InstanceDoesNotSupportAnycast",
        "该实例不支持AnycastEIP。";
    InvalidParameterValueInstanceHasNoWanIP => INVALIDPARAMETERVALUE_INSTANCEHASNOWANIP = "InvalidParameterValue.InstanceHasNoWanIP",
        "实例不存在公网IP。";
    InvalidParameterValueInstanceHasWanIP => INVALIDPARAMETERVALUE_INSTANCEHASWANIP = "InvalidParameterValue.InstanceHasWanIP",
        "该实例已有WanIP。";
    InvalidParameterValueInstanceIdMalformed => INVALIDPARAMETERVALUE_INSTANCEIDMALFORMED = "InvalidParameterValue.InstanceIdMalformed",
        "实例ID错误。";
    InvalidParameterValueInstanceNoCalcIP => INVALIDPARAMETERVALUE_INSTANCENOCALCIP = "InvalidParameterValue.InstanceNoCalcIP",
        "该实例没有CalcIP，无法完成请求。";
    InvalidParameterValueInstanceNoWanIP => INVALIDPARAMETERVALUE_INSTANCENOWANIP = "InvalidParameterValue.InstanceNoWanIP",
        "该实例没有WanIP，无法完成请求。";
    InvalidParameterValueInstanceNormalPublicIpBlocked => INVALIDPARAMETERVALUE_INSTANCENORMALPUBLICIPBLOCKED = "InvalidParameterValue.InstanceNormalPublicIpBlocked",
        "由于该IP被禁用，无法绑定该实例。";
    InvalidParameterValueInstanceNotMatchAssociateEni => INVALIDPARAMETERVALUE_INSTANCENOTMATCHASSOCIATEENI = "InvalidParameterValue.InstanceNotMatchAssociateEni",
        "弹性网卡绑定的实例与地址绑定的实例不一致。";
    InvalidParameterValueInternetChargeTypeNotChanged => INVALIDPARAMETERVALUE_INTERNETCHARGETYPENOTCHANGED = "InvalidParameterValue.InternetChargeTypeNotChanged",
        "网络计费模式没有更改。";
    InvalidParameterValueInvalidBandwidthPackageChargeType => INVALIDPARAMETERVALUE_INVALIDBANDWIDTHPACKAGECHARGETYPE = "InvalidParameterValue.InvalidBandwidthPackageChargeType",
        "无效的带宽包计费方式。";
    InvalidParameterValueInvalidBusiness => INVALIDPARAMETERVALUE_INVALIDBUSINESS = "InvalidParameterValue.InvalidBusiness",
        "参数的值不存在或不支持。";
    InvalidParameterValueInvalidDedicatedClusterId => INVALIDPARAMETERVALUE_INVALIDDEDICATEDCLUSTERID = "InvalidParameterValue.InvalidDedicatedClusterId",
        "传入的DedicatedClusterId有误。";
    InvalidParameterValueInvalidInstanceInternetChargeType => INVALIDPARAMETERVALUE_INVALIDINSTANCEINTERNETCHARGETYPE = "InvalidParameterValue.InvalidInstanceInternetChargeType",
        "该IP只能绑定小时流量后付费和带宽包实例。";
    InvalidParameterValueInvalidInstanceState => INVALIDPARAMETERVALUE_INVALIDINSTANCESTATE = "InvalidParameterValue.InvalidInstanceState",
        "该实例状态无法完成操作。";
    InvalidParameterValueInvalidIpv6 => INVALIDPARAMETERVALUE_INVALIDIPV6 = "InvalidParameterValue.InvalidIpv6",
        "无效的IPv6地址。";
    InvalidParameterValueInvalidTag => INVALIDPARAMETERVALUE_INVALIDTAG = "InvalidParameterValue.InvalidTag",
        "该Tag不合法。";
    InvalidParameterValueLBAlreadyBindEip => INVALIDPARAMETERVALUE_LBALREADYBINDEIP = "InvalidParameterValue.LBAlreadyBindEip",
        "负载均衡实例已经绑定了EIP。";
    InvalidParameterValueLimitExceeded => INVALIDPARAMETERVALUE_LIMITEXCEEDED = "InvalidParameterValue.LimitExceeded",
        "参数值超出限制。";
    InvalidParameterValueMalformed => INVALIDPARAMETERVALUE_MALFORMED = "InvalidParameterValue.Malformed",
        "入参格式不合法。";
    InvalidParameterValueMissingAssociateEntity => INVALIDPARAMETERVALUE_MISSINGASSOCIATEENTITY = "InvalidParameterValue.MissingAssociateEntity",
        "缺少绑定的实例。";
    InvalidParameterValueMixedAddressIpSetType => INVALIDPARAMETERVALUE_MIXEDADDRESSIPSETTYPE = "InvalidParameterValue.MixedAddressIpSetType",
        "集群类型不同的IP不可在同一请求中。";
    InvalidParameterValueNatGatewaySnatRuleNotExists => INVALIDPARAMETERVALUE_NATGATEWAYSNATRULENOTEXISTS = "InvalidParameterValue.NatGatewaySnatRuleNotExists",
        "NAT网关的SNAT转换规则不存在。";
    InvalidParameterValueNatSnatRuleExists => INVALIDPARAMETERVALUE_NATSNATRULEEXISTS = "InvalidParameterValue.NatSnatRuleExists",
        "NAT网关的SNAT规则已经存在。";
    InvalidParameterValueNetDetectInVpc => INVALIDPARAMETERVALUE_NETDETECTINVPC = "InvalidParameterValue.NetDetectInVpc",
        "探测目的IP和网络探测在同一个VPC内。";
    InvalidParameterValueNetDetectNotFoundIp => INVALIDPARAMETERVALUE_NETDETECTNOTFOUNDIP = "InvalidParameterValue.NetDetectNotFoundIp",
        "探测目的IP在云联网的路由表中找不到匹配的下一跳。";
    InvalidParameterValueNetDetectSameIp => INVALIDPARAMETERVALUE_NETDETECTSAMEIP = "InvalidParameterValue.NetDetectSameIp",
        "探测目的IP与同一个私有网络内的同一个子网下的其他网络探测的探测目的IP相同。";
    InvalidParameterValueNetworkInterfaceIdMalformed => INVALIDPARAMETERVALUE_NETWORKINTERFACEIDMALFORMED = "InvalidParameterValue.NetworkInterfaceIdMalformed",
        "网络接口ID不正确。";
    InvalidParameterValueNetworkInterfaceNotFound => INVALIDPARAMETERVALUE_NETWORKINTERFACENOTFOUND = "InvalidParameterValue.NetworkInterfaceNotFound",
        "未找到网络接口ID，或私有IP地址未在网络接口配置。";
    InvalidParameterValueOnlySupportedForMasterNetworkCard => INVALIDPARAMETERVALUE_ONLYSUPPORTEDFORMASTERNETWORKCARD = "InvalidParameterValue.OnlySupportedForMasterNetworkCard",
        "该操作仅对主网卡支持。";
    InvalidParameterValueRange => INVALIDPARAMETERVALUE_RANGE = "InvalidParameterValue.Range",
        "参数值不在指定范围。";
    InvalidParameterValueReserved => INVALIDPARAMETERVALUE_RESERVED = "InvalidParameterValue.Reserved",
        "参数值是一个系统保留对象。";
    InvalidParameterValueResourceAlreadyExisted => INVALIDPARAMETERVALUE_RESOURCEALREADYEXISTED = "InvalidParameterValue.ResourceAlreadyExisted",
        "该资源已加入其他带宽包。";
    InvalidParameterValueResourceExpired => INVALIDPARAMETERVALUE_RESOURCEEXPIRED = "InvalidParameterValue.ResourceExpired",
        "该资源已过期。";
    InvalidParameterValueResourceIdMalformed => INVALIDPARAMETERVALUE_RESOURCEIDMALFORMED = "InvalidParameterValue.ResourceIdMalformed",
        "资源ID不正确。";
    InvalidParameterValueResourceNotExisted => INVALIDPARAMETERVALUE_RESOURCENOTEXISTED = "InvalidParameterValue.ResourceNotExisted",
        "该资源不在此带宽包中。";
    InvalidParameterValueResourceNotFound => INVALIDPARAMETERVALUE_RESOURCENOTFOUND = "InvalidParameterValue.ResourceNotFound",
        "未查询到该资源。";
    InvalidParameterValueResourceNotSupport => INVALIDPARAMETERVALUE_RESOURCENOTSUPPORT = "InvalidParameterValue.ResourceNotSupport",
        "该资源不支持此操作。";
    InvalidParameterValueSubnetConflict => INVALIDPARAMETERVALUE_SUBNETCONFLICT = "InvalidParameterValue.SubnetConflict",
        "子网CIDR冲突。";
    InvalidParameterValueSubnetOverlap => INVALIDPARAMETERVALUE_SUBNETOVERLAP = "InvalidParameterValue.SubnetOverlap",
        "CIDR与同一个私有网络内的另一个子网发生重叠。";
    InvalidParameterValueSubnetOverlapAssistCidr => INVALIDPARAMETERVALUE_SUBNETOVERLAPASSISTCIDR = "InvalidParameterValue.SubnetOverlapAssistCidr",
        "子网与辅助Cidr网段重叠。";
    InvalidParameterValueSubnetRange => INVALIDPARAMETERVALUE_SUBNETRANGE = "InvalidParameterValue.SubnetRange",
        "子网CIDR不合法。";
    InvalidParameterValueTagDuplicateKey => INVALIDPARAMETERVALUE_TAGDUPLICATEKEY = "InvalidParameterValue.TagDuplicateKey",
        "标签键重复。";
    InvalidParameterValueTagDuplicateResourceType => INVALIDPARAMETERVALUE_TAGDUPLICATERESOURCETYPE = "InvalidParameterValue.TagDuplicateResourceType",
        "重复的标签资源类型。";
    InvalidParameterValueTagInvalidKey => INVALIDPARAMETERVALUE_TAGINVALIDKEY = "InvalidParameterValue.TagInvalidKey",
        "标签键无效。";
    InvalidParameterValueTagInvalidKeyLen => INVALIDPARAMETERVALUE_TAGINVALIDKEYLEN = "InvalidParameterValue.TagInvalidKeyLen",
        "标签键长度无效。";
    InvalidParameterValueTagInvalidVal => INVALIDPARAMETERVALUE_TAGINVALIDVAL = "InvalidParameterValue.TagInvalidVal",
        "标签值无效。";
    InvalidParameterValueTagKeyNotExists => INVALIDPARAMETERVALUE_TAGKEYNOTEXISTS = "InvalidParameterValue.TagKeyNotExists",
        "标签键不存在。";
    InvalidParameterValueTagNotAllocatedQuota => INVALIDPARAMETERVALUE_TAGNOTALLOCATEDQUOTA = "InvalidParameterValue.TagNotAllocatedQuota",
        "标签没有分配配额。";
    InvalidParameterValueTagNotExisted => INVALIDPARAMETERVALUE_TAGNOTEXISTED = "InvalidParameterValue.TagNotExisted",
        "该标签和值不存在。";
    InvalidParameterValueTagNotSupportTag => INVALIDPARAMETERVALUE_TAGNOTSUPPORTTAG = "InvalidParameterValue.TagNotSupportTag",
        "不支持的标签。";
    InvalidParameterValueTagResourceFormatError => INVALIDPARAMETERVALUE_TAGRESOURCEFORMATERROR = "InvalidParameterValue.TagResourceFormatError",
        "'标签资源格式错误。";
    InvalidParameterValueTagTimestampExceeded => INVALIDPARAMETERVALUE_TAGTIMESTAMPEXCEEDED = "InvalidParameterValue.TagTimestampExceeded",
        "标签时间戳超配。";
    InvalidParameterValueTagValNotExists => INVALIDPARAMETERVALUE_TAGVALNOTEXISTS = "InvalidParameterValue.TagValNotExists",
        "标签值不存在。";
    InvalidParameterValueTooLong => INVALIDPARAMETERVALUE_TOOLONG = "InvalidParameterValue.TooLong",
        "无效参数值。参数值太长。";
    InvalidParameterValueUnavailableZone => INVALIDPARAMETERVALUE_UNAVAILABLEZONE = "InvalidParameterValue.UnavailableZone",
        "该可用区不可用。";
    InvalidParameterValueVpcCidrConflict => INVALIDPARAMETERVALUE_VPCCIDRCONFLICT = "InvalidParameterValue.VpcCidrConflict",
        "目的网段和当前VPC的CIDR冲突。";
    InvalidParameterValueVpgTypeNotMatch => INVALIDPARAMETERVALUE_VPGTYPENOTMATCH = "InvalidParameterValue.VpgTypeNotMatch",
        "当前功能不支持此专线网关。";
    InvalidParameterValueVpnConnCidrConflict => INVALIDPARAMETERVALUE_VPNCONNCIDRCONFLICT = "InvalidParameterValue.VpnConnCidrConflict",
        "目的网段和当前VPN通道的CIDR冲突。";
    InvalidParameterValueVpnConnHealthCheckIpConflict => INVALIDPARAMETERVALUE_VPNCONNHEALTHCHECKIPCONFLICT = "InvalidParameterValue.VpnConnHealthCheckIpConflict",
        "VPN通道探测ip冲突。";
    InvalidParameterValueZoneConflict => INVALIDPARAMETERVALUE_ZONECONFLICT = "InvalidParameterValue.ZoneConflict",
        "参数Zone的值与CDC所在Zone冲突。";
    InvalidPrivateIpAddressAlreadyBindEip => INVALIDPRIVATEIPADDRESS_ALREADYBINDEIP = "InvalidPrivateIpAddress.AlreadyBindEip",
        "指定弹性网卡的指定内网IP已经绑定了EIP，不能重复绑定。";
    InvalidRouteIdNotFound => INVALIDROUTEID_NOTFOUND = "InvalidRouteId.NotFound",
        "无效的路由策略ID（RouteId）。";
    InvalidRouteTableIdMalformed => INVALIDROUTETABLEID_MALFORMED = "InvalidRouteTableId.Malformed",
        "无效的路由表,路由表实例ID不合法。";
    InvalidRouteTableIdNotFound => INVALIDROUTETABLEID_NOTFOUND = "InvalidRouteTableId.NotFound",
        "无效的路由表,路由表资源不存在，请再次核实您输入的资源信息是否正确。";
    InvalidSecurityGroupIDMalformed => INVALIDSECURITYGROUPID_MALFORMED = "InvalidSecurityGroupID.Malformed",
        "无效的安全组,安全组实例ID不合法。";
    InvalidSecurityGroupIDNotFound => INVALIDSECURITYGROUPID_NOTFOUND = "InvalidSecurityGroupID.NotFound",
        "无效的安全组,安全组实例ID不存在。";
    InvalidVpcIdMalformed => INVALIDVPCID_MALFORMED = "InvalidVpcId.Malformed",
        "无效的VPC,VPC实例ID不合法。";
    InvalidVpcIdNotFound => INVALIDVPCID_NOTFOUND = "InvalidVpcId.NotFound",
        "无效的VPC,VPC资源不存在。";
    InvalidVpnGatewayIdMalformed => INVALIDVPNGATEWAYID_MALFORMED = "InvalidVpnGatewayId.Malformed",
        "无效的VPN网关,VPN实例ID不合法。";
    InvalidVpnGatewayIdNotFound => INVALIDVPNGATEWAYID_NOTFOUND = "InvalidVpnGatewayId.NotFound",
        "无效的VPN网关,VPN实例不存在，请再次核实您输入的资源信息是否正确。";
    LimitExceeded => LIMITEXCEEDED = "LimitExceeded",
        "超过配额限制。";
    LimitExceededAccountReturnQuota => LIMITEXCEEDED_ACCOUNTRETURNQUOTA = "LimitExceeded.AccountReturnQuota",
        "账号退还配额超过限制。";
    LimitExceededAddress => LIMITEXCEEDED_ADDRESS = "LimitExceeded.Address",
        "分配IP地址数量达到上限。";
    LimitExceededAddressQuotaLimitExceeded => LIMITEXCEEDED_ADDRESSQUOTALIMITEXCEEDED = "LimitExceeded.AddressQuotaLimitExceeded",
        "租户申请的弹性IP超过上限。";
    LimitExceededBandwidthPackageQuota => LIMITEXCEEDED_BANDWIDTHPACKAGEQUOTA = "LimitExceeded.BandwidthPackageQuota",
        "带宽包配额超过限制。";
    LimitExceededChangeAddressQuota => LIMITEXCEEDED_CHANGEADDRESSQUOTA = "LimitExceeded.ChangeAddressQuota",
        "超过更换IP配额。";
    LimitExceededCidrBlock => LIMITEXCEEDED_CIDRBLOCK = "LimitExceeded.CidrBlock",
        "VPC分配网段数量达到上限。";
    LimitExceededDailyAllocateAddressQuotaLimitExceeded => LIMITEXCEEDED_DAILYALLOCATEADDRESSQUOTALIMITEXCEEDED = "LimitExceeded.DailyAllocateAddressQuotaLimitExceeded",
        "租户每天申请的弹性IP超过上限。";
    LimitExceededDailyChangeAddressQuota => LIMITEXCEEDED_DAILYCHANGEADDRESSQUOTA = "LimitExceeded.DailyChangeAddressQuota",
        "超过每日更换IP配额。";
    LimitExceededInstanceAddressQuota => LIMITEXCEEDED_INSTANCEADDRESSQUOTA = "LimitExceeded.InstanceAddressQuota",
        "实例绑定的弹性IP超过配额。";
    LimitExceededModifyAddressInternetChargeTypeQuota => LIMITEXCEEDED_MODIFYADDRESSINTERNETCHARGETYPEQUOTA = "LimitExceeded.ModifyAddressInternetChargeTypeQuota",
        "修改地址网络计费模式配额超过限制。";
    LimitExceededMonthlyAddressRecoveryQuota => LIMITEXCEEDED_MONTHLYADDRESSRECOVERYQUOTA = "LimitExceeded.MonthlyAddressRecoveryQuota",
        "每月地址找回配额超过限制。";
    LimitExceededNatGatewayLimitExceeded => LIMITEXCEEDED_NATGATEWAYLIMITEXCEEDED = "LimitExceeded.NatGatewayLimitExceeded",
        "NAT网关数量已达到上限。";
    LimitExceededNatGatewayPerVpcLimitExceeded => LIMITEXCEEDED_NATGATEWAYPERVPCLIMITEXCEEDED = "LimitExceeded.NatGatewayPerVpcLimitExceeded",
        "私有网络创建的NAT网关超过上限。";
    LimitExceededNumberOfFilters => LIMITEXCEEDED_NUMBEROFFILTERS = "LimitExceeded.NumberOfFilters",
        "过滤参数名称超过限制。";
    LimitExceededPublicIpAddressPerNatGatewayLimitExceeded => LIMITEXCEEDED_PUBLICIPADDRESSPERNATGATEWAYLIMITEXCEEDED = "LimitExceeded.PublicIpAddressPerNatGatewayLimitExceeded",
        "NAT网关绑定的弹性IP超过上限。";
    LimitExceededSecurityGroupPolicySet => LIMITEXCEEDED_SECURITYGROUPPOLICYSET = "LimitExceeded.SecurityGroupPolicySet",
        "安全组规则数量超过上限。";
    LimitExceededSubnetCidrBlock => LIMITEXCEEDED_SUBNETCIDRBLOCK = "LimitExceeded.SubnetCidrBlock",
        "子网分配子网段数量达到上限。";
    LimitExceededTagKeyExceeded => LIMITEXCEEDED_TAGKEYEXCEEDED = "LimitExceeded.TagKeyExceeded",
        "标签键已达到上限。";
    LimitExceededTagKeyPerResourceExceeded => LIMITEXCEEDED_TAGKEYPERRESOURCEEXCEEDED = "LimitExceeded.TagKeyPerResourceExceeded",
        "每个资源的标签键已达到上限。";
    LimitExceededTagNotEnoughQuota => LIMITEXCEEDED_TAGNOTENOUGHQUOTA = "LimitExceeded.TagNotEnoughQuota",
        "没有足够的标签配额。";
    LimitExceededTagQuota => LIMITEXCEEDED_TAGQUOTA = "LimitExceeded.TagQuota",
        "标签配额已满，无法创建资源。";
    LimitExceededTagQuotaExceeded => LIMITEXCEEDED_TAGQUOTAEXCEEDED = "LimitExceeded.TagQuotaExceeded",
        "标签配额已达到上限。";
    LimitExceededTagTagsExceeded => LIMITEXCEEDED_TAGTAGSEXCEEDED = "LimitExceeded.TagTagsExceeded",
        "标签键的数目已达到上限。";
    MissingParameter => MISSINGPARAMETER = "MissingParameter",
        "缺少参数错误。";
    OperationDeniedAddressInArrears => OPERATIONDENIED_ADDRESSINARREARS = "OperationDenied.AddressInArrears",
        "指定公网IP处于隔离状态。";
    OperationDeniedMutexTaskRunning => OPERATIONDENIED_MUTEXTASKRUNNING = "OperationDenied.MutexTaskRunning",
        "互斥的任务正在执行。";
    ResourceInUse => RESOURCEINUSE = "ResourceInUse",
        "资源被占用。";
    ResourceInUseAddress => RESOURCEINUSE_ADDRESS = "ResourceInUse.Address",
        "指定IP地址已经在使用中。";
    ResourceInsufficient => RESOURCEINSUFFICIENT = "ResourceInsufficient",
        "资源不足。";
    ResourceInsufficientCidrBlock => RESOURCEINSUFFICIENT_CIDRBLOCK = "ResourceInsufficient.CidrBlock",
        "网段资源不足。";
    ResourceNotFound => RESOURCENOTFOUND = "ResourceNotFound",
        "资源不存在。";
    ResourceNotFoundSvcNotExist => RESOURCENOTFOUND_SVCNOTEXIST = "ResourceNotFound.SvcNotExist",
        "Svc不存在。";
    ResourceUnavailable => RESOURCEUNAVAILABLE = "ResourceUnavailable",
        "资源不可用。";
    ResourceUnavailableServiceWhiteListNotAdded => RESOURCEUNAVAILABLE_SERVICEWHITELISTNOTADDED = "ResourceUnavailable.ServiceWhiteListNotAdded",
        "当前用户不在指定终端节点服务的白名单内。";
    UnauthorizedOperation => UNAUTHORIZEDOPERATION = "UnauthorizedOperation",
        "未授权操作。";
    UnauthorizedOperationAnycastEip => UNAUTHORIZEDOPERATION_ANYCASTEIP = "UnauthorizedOperation.AnycastEip",
        "无权限申请AnycastEip资源。";
    UnauthorizedOperationAttachmentNotFound => UNAUTHORIZEDOPERATION_ATTACHMENTNOTFOUND = "UnauthorizedOperation.AttachmentNotFound",
        "绑定关系不存在。";
    UnauthorizedOperationInvalidAccount => UNAUTHORIZEDOPERATION_INVALIDACCOUNT = "UnauthorizedOperation.InvalidAccount",
        "未授权的用户。";
    UnauthorizedOperationNoRealNameAuthentication => UNAUTHORIZEDOPERATION_NOREALNAMEAUTHENTICATION = "UnauthorizedOperation.NoRealNameAuthentication",
        "账号未实名。";
    UnauthorizedOperationPrimaryIp => UNAUTHORIZEDOPERATION_PRIMARYIP = "UnauthorizedOperation.PrimaryIp",
        "主IP不支持指定操作。";
    UnknownParameter => UNKNOWNPARAMETER = "UnknownParameter",
        "未知参数错误。";
    UnknownParameterWithGuess => UNKNOWNPARAMETER_WITHGUESS = "UnknownParameter.WithGuess",
        "参数无法识别，可以尝试相似参数代替。";
    UnsupportedOperation => UNSUPPORTEDOPERATION = "UnsupportedOperation",
        "操作不支持。";
    UnsupportedOperationActionNotFound => UNSUPPORTEDOPERATION_ACTIONNOTFOUND = "UnsupportedOperation.ActionNotFound",
        "接口不存在。";
    UnsupportedOperationAddressIpInArrear => UNSUPPORTEDOPERATION_ADDRESSIPINARREAR = "UnsupportedOperation.AddressIpInArrear",
        "欠费状态不支持该操作。";
    UnsupportedOperationAddressIpInternetChargeTypeNotPermit => UNSUPPORTEDOPERATION_ADDRESSIPINTERNETCHARGETYPENOTPERMIT = "UnsupportedOperation.AddressIpInternetChargeTypeNotPermit",
        "此付费模式的IP地址不支持该操作。";
    UnsupportedOperationAddressIpNotSupportInstance => UNSUPPORTEDOPERATION_ADDRESSIPNOTSUPPORTINSTANCE = "UnsupportedOperation.AddressIpNotSupportInstance",
        "绑定此实例的IP地址不支持该操作。";
    UnsupportedOperationAddressIpStatusNotPermit => UNSUPPORTEDOPERATION_ADDRESSIPSTATUSNOTPERMIT = "UnsupportedOperation.AddressIpStatusNotPermit",
        "此IP地址状态不支持该操作。";
    UnsupportedOperationAddressStatusNotPermit => UNSUPPORTEDOPERATION_ADDRESSSTATUSNOTPERMIT = "UnsupportedOperation.AddressStatusNotPermit",
        "该地址状态不支持此操作。";
    UnsupportedOperationAppIdMismatch => UNSUPPORTEDOPERATION_APPIDMISMATCH = "UnsupportedOperation.AppIdMismatch",
        "资源不在指定的AppId下。";
    UnsupportedOperationAppIdNotFound => UNSUPPORTEDOPERATION_APPIDNOTFOUND = "UnsupportedOperation.AppIdNotFound",
        "APPId不存在。";
    UnsupportedOperationAttachmentAlreadyExists => UNSUPPORTEDOPERATION_ATTACHMENTALREADYEXISTS = "UnsupportedOperation.AttachmentAlreadyExists",
        "绑定关系已存在。";
    UnsupportedOperationAttachmentNotFound => UNSUPPORTEDOPERATION_ATTACHMENTNOTFOUND = "UnsupportedOperation.AttachmentNotFound",
        "绑定关系不存在。";
    UnsupportedOperationBandwidthNotExpired => UNSUPPORTEDOPERATION_BANDWIDTHNOTEXPIRED = "UnsupportedOperation.BandwidthNotExpired",
        "当前云联网还有预付费带宽未到期，不支持主动删除。";
    UnsupportedOperationBandwidthPackageIdNotSupported => UNSUPPORTEDOPERATION_BANDWIDTHPACKAGEIDNOTSUPPORTED = "UnsupportedOperation.BandwidthPackageIdNotSupported",
        "该带宽包不支持此操作。";
    UnsupportedOperationBindEIP => UNSUPPORTEDOPERATION_BINDEIP = "UnsupportedOperation.BindEIP",
        "已绑定EIP。";
    UnsupportedOperationCIDRUnSupportedClassicLink => UNSUPPORTEDOPERATION_CIDRUNSUPPORTEDCLASSICLINK = "UnsupportedOperation.CIDRUnSupportedClassicLink",
        "指定VPC CIDR范围不支持私有网络和基础网络设备互通。";
    UnsupportedOperationCcnAttached => UNSUPPORTEDOPERATION_CCNATTACHED = "UnsupportedOperation.CcnAttached",
        "实例已关联CCN。";
    UnsupportedOperationCcnHasFlowLog => UNSUPPORTEDOPERATION_CCNHASFLOWLOG = "UnsupportedOperation.CcnHasFlowLog",
        "当前云联网有流日志，不支持删除。";
    UnsupportedOperationCcnNotAttached => UNSUPPORTEDOPERATION_CCNNOTATTACHED = "UnsupportedOperation.CcnNotAttached",
        "实例未关联CCN。";
    UnsupportedOperationCcnOrdinaryAccountRefuseAttach => UNSUPPORTEDOPERATION_CCNORDINARYACCOUNTREFUSEATTACH = "UnsupportedOperation.CcnOrdinaryAccountRefuseAttach",
        "跨账号场景下不支持自驾云账号实例 关联普通账号云联网。";
    UnsupportedOperationCcnRouteTableNotExist => UNSUPPORTEDOPERATION_CCNROUTETABLENOTEXIST = "UnsupportedOperation.CcnRouteTableNotExist",
        "指定的路由表不存在。";
    UnsupportedOperationCdcSubnetNotSupportUnLocalGateway => UNSUPPORTEDOPERATION_CDCSUBNETNOTSUPPORTUNLOCALGATEWAY = "UnsupportedOperation.CdcSubnetNotSupportUnLocalGateway",
        "CDC子网不支持创建非本地网关类型的路由。";
    UnsupportedOperationClassicInstanceIdAlreadyExists => UNSUPPORTEDOPERATION_CLASSICINSTANCEIDALREADYEXISTS = "UnsupportedOperation.ClassicInstanceIdAlreadyExists",
        "实例已经和VPC绑定。";
    UnsupportedOperationClbPolicyLimit => UNSUPPORTEDOPERATION_CLBPOLICYLIMIT = "UnsupportedOperation.ClbPolicyLimit",
        "公网Clb不支持该规则。";
    UnsupportedOperationConflictWithDockerRoute => UNSUPPORTEDOPERATION_CONFLICTWITHDOCKERROUTE = "UnsupportedOperation.ConflictWithDockerRoute",
        "与该VPC下的TKE容器的网段重叠。";
    UnsupportedOperationDCGatewayNatRuleExists => UNSUPPORTEDOPERATION_DCGATEWAYNATRULEEXISTS = "UnsupportedOperation.DCGatewayNatRuleExists",
        "该专线网关存在关联的NAT规则，不允许删除，请先删调所有的NAT规则。";
    UnsupportedOperationDcGatewaysNotFoundInVpc => UNSUPPORTEDOPERATION_DCGATEWAYSNOTFOUNDINVPC = "UnsupportedOperation.DcGatewaysNotFoundInVpc",
        "指定的VPC未发现专线网关。";
    UnsupportedOperationDelDefaultRoute => UNSUPPORTEDOPERATION_DELDEFAULTROUTE = "UnsupportedOperation.DelDefaultRoute",
        "禁止删除默认路由表。";
    UnsupportedOperationDelRouteWithSubnet => UNSUPPORTEDOPERATION_DELROUTEWITHSUBNET = "UnsupportedOperation.DelRouteWithSubnet",
        "禁止删除已关联子网的路由表。";
    UnsupportedOperationDirectConnectGatewayIsUpdatingCommunity => UNSUPPORTEDOPERATION_DIRECTCONNECTGATEWAYISUPDATINGCOMMUNITY = "UnsupportedOperation.DirectConnectGatewayIsUpdatingCommunity",
        "专线网关正在更新BGP Community属性。";
    UnsupportedOperationDisabledNotifyCcn => UNSUPPORTEDOPERATION_DISABLEDNOTIFYCCN = "UnsupportedOperation.DisabledNotifyCcn",
        "指定的路由策略已发布至云联网，请先撤销。";
    UnsupportedOperationDuplicatePolicy => UNSUPPORTEDOPERATION_DUPLICATEPOLICY = "UnsupportedOperation.DuplicatePolicy",
        "安全组规则重复。";
    UnsupportedOperationEcmp => UNSUPPORTEDOPERATION_ECMP = "UnsupportedOperation.Ecmp",
        "不支持ECMP。";
    UnsupportedOperationEcmpWithCcnRoute => UNSUPPORTEDOPERATION_ECMPWITHCCNROUTE = "UnsupportedOperation.EcmpWithCcnRoute",
        "和云联网的路由形成ECMP。";
    UnsupportedOperationEcmpWithUserRoute => UNSUPPORTEDOPERATION_ECMPWITHUSERROUTE = "UnsupportedOperation.EcmpWithUserRoute",
        "和用户自定义的路由形成ECMP。";
    UnsupportedOperationEndPointService => UNSUPPORTEDOPERATION_ENDPOINTSERVICE = "UnsupportedOperation.EndPointService",
        "终端节点服务本身不能是终端节点。";
    UnsupportedOperationFlowLogsNotSupportKoInstanceEni => UNSUPPORTEDOPERATION_FLOWLOGSNOTSUPPORTKOINSTANCEENI = "UnsupportedOperation.FlowLogsNotSupportKoInstanceEni",
        "不支持创建流日志：当前弹性网卡绑定的是KO机型。";
    UnsupportedOperationFlowLogsNotSupportNullInstanceEni => UNSUPPORTEDOPERATION_FLOWLOGSNOTSUPPORTNULLINSTANCEENI = "UnsupportedOperation.FlowLogsNotSupportNullInstanceEni",
        "不支持创建流日志：当前弹性网卡未绑定实例。";
    UnsupportedOperationIncorrectAddressResourceType => UNSUPPORTEDOPERATION_INCORRECTADDRESSRESOURCETYPE = "UnsupportedOperation.IncorrectAddressResourceType",
        "该种类型地址不支持此操作。";
    UnsupportedOperationInstanceAndRtbNotMatch => UNSUPPORTEDOPERATION_INSTANCEANDRTBNOTMATCH = "UnsupportedOperation.InstanceAndRtbNotMatch",
        "用户配置的实例和路由表不匹配。";
    UnsupportedOperationInstanceMismatch => UNSUPPORTEDOPERATION_INSTANCEMISMATCH = "UnsupportedOperation.InstanceMismatch",
        "指定实例资源不匹配。";
    UnsupportedOperationInstanceOrdinaryAccountRefuseAttach => UNSUPPORTEDOPERATION_INSTANCEORDINARYACCOUNTREFUSEATTACH = "UnsupportedOperation.InstanceOrdinaryAccountRefuseAttach",
        "跨账号场景下不支持普通账号实例关联自驾云账号云联网。";
    UnsupportedOperationInstanceStateNotSupported => UNSUPPORTEDOPERATION_INSTANCESTATENOTSUPPORTED = "UnsupportedOperation.InstanceStateNotSupported",
        "该地址绑定的实例状态不支持此操作。";
    UnsupportedOperationInsufficientFunds => UNSUPPORTEDOPERATION_INSUFFICIENTFUNDS = "UnsupportedOperation.InsufficientFunds",
        "账户余额不足。";
    UnsupportedOperationInvalidAction => UNSUPPORTEDOPERATION_INVALIDACTION = "UnsupportedOperation.InvalidAction",
        "不支持该操作。";
    UnsupportedOperationInvalidAddressInternetChargeType => UNSUPPORTEDOPERATION_INVALIDADDRESSINTERNETCHARGETYPE = "UnsupportedOperation.InvalidAddressInternetChargeType",
        "该地址的网络付费方式不支持此操作。";
    UnsupportedOperationInvalidAddressState => UNSUPPORTEDOPERATION_INVALIDADDRESSSTATE = "UnsupportedOperation.InvalidAddressState",
        "该地址状态不支持此操作。";
    UnsupportedOperationInvalidInstanceState => UNSUPPORTEDOPERATION_INVALIDINSTANCESTATE = "UnsupportedOperation.InvalidInstanceState",
        "无效的实例状态。";
    UnsupportedOperationInvalidResourceInternetChargeType => UNSUPPORTEDOPERATION_INVALIDRESOURCEINTERNETCHARGETYPE = "UnsupportedOperation.InvalidResourceInternetChargeType",
        "该计费方式不支持此操作。";
    UnsupportedOperationInvalidResourceProtocol => UNSUPPORTEDOPERATION_INVALIDRESOURCEPROTOCOL = "UnsupportedOperation.InvalidResourceProtocol",
        "不支持加入此协议的带宽包。";
    UnsupportedOperationInvalidState => UNSUPPORTEDOPERATION_INVALIDSTATE = "UnsupportedOperation.InvalidState",
        "资源状态不合法。";
    UnsupportedOperationInvalidStatusNotifyCcn => UNSUPPORTEDOPERATION_INVALIDSTATUSNOTIFYCCN = "UnsupportedOperation.InvalidStatusNotifyCcn",
        "当前状态不支持发布至云联网，请重试。";
    UnsupportedOperationIsNotFinanceAccount => UNSUPPORTEDOPERATION_ISNOTFINANCEACCOUNT = "UnsupportedOperation.IsNotFinanceAccount",
        "关联当前云联网的实例的账号存在不是金融云账号。";
    UnsupportedOperationIspNotSupported => UNSUPPORTEDOPERATION_ISPNOTSUPPORTED = "UnsupportedOperation.IspNotSupported",
        "该ISP不支持此操作。";
    UnsupportedOperationLocalGatewayAlreadyExists => UNSUPPORTEDOPERATION_LOCALGATEWAYALREADYEXISTS = "UnsupportedOperation.LocalGatewayAlreadyExists",
        "指定的CDC已存在本地网关。";
    UnsupportedOperationModifyAddressAttribute => UNSUPPORTEDOPERATION_MODIFYADDRESSATTRIBUTE = "UnsupportedOperation.ModifyAddressAttribute",
        "账户不支持修改公网IP的该属性。";
    UnsupportedOperationMutexOperationTaskRunning => UNSUPPORTEDOPERATION_MUTEXOPERATIONTASKRUNNING = "UnsupportedOperation.MutexOperationTaskRunning",
        "资源互斥操作任务正在执行。";
    UnsupportedOperationNatGatewayRulePipExists => UNSUPPORTEDOPERATION_NATGATEWAYRULEPIPEXISTS = "UnsupportedOperation.NatGatewayRulePipExists",
        "SNAT/DNAT转换规则所指定的内网IP已绑定了其他的规则，无法重复绑定。";
    UnsupportedOperationNatGatewayTypeNotSupportSNAT => UNSUPPORTEDOPERATION_NATGATEWAYTYPENOTSUPPORTSNAT = "UnsupportedOperation.NatGatewayTypeNotSupportSNAT",
        "NAT网关类型不支持SNAT规则。";
    UnsupportedOperationNatNotSupported => UNSUPPORTEDOPERATION_NATNOTSUPPORTED = "UnsupportedOperation.NatNotSupported",
        "NAT实例不支持该操作。";
    UnsupportedOperationNormalSubnetNotSupportLocalGateway => UNSUPPORTEDOPERATION_NORMALSUBNETNOTSUPPORTLOCALGATEWAY = "UnsupportedOperation.NormalSubnetNotSupportLocalGateway",
        "指定的子网不支持创建本地网关类型的路由。";
    UnsupportedOperationNotLockedInstanceOperation => UNSUPPORTEDOPERATION_NOTLOCKEDINSTANCEOPERATION = "UnsupportedOperation.NotLockedInstanceOperation",
        "当前实例已被封禁，无法进行此操作。";
    UnsupportedOperationNotPendingCcnInstance => UNSUPPORTEDOPERATION_NOTPENDINGCCNINSTANCE = "UnsupportedOperation.NotPendingCcnInstance",
        "当前云联网实例未处于申请中状态，无法进行操作。";
    UnsupportedOperationNotPostpaidCcnOperation => UNSUPPORTEDOPERATION_NOTPOSTPAIDCCNOPERATION = "UnsupportedOperation.NotPostpaidCcnOperation",
        "当前云联网为非后付费类型，无法进行此操作。";
    UnsupportedOperationNotSupportDeleteDefaultRouteTable => UNSUPPORTEDOPERATION_NOTSUPPORTDELETEDEFAULTROUTETABLE = "UnsupportedOperation.NotSupportDeleteDefaultRouteTable",
        "不支持删除默认路由表。";
    UnsupportedOperationNotSupportedUpdateCcnRoutePublish => UNSUPPORTEDOPERATION_NOTSUPPORTEDUPDATECCNROUTEPUBLISH = "UnsupportedOperation.NotSupportedUpdateCcnRoutePublish",
        "当前云联网不支持更新路由发布。";
    UnsupportedOperationNotifyCcn => UNSUPPORTEDOPERATION_NOTIFYCCN = "UnsupportedOperation.NotifyCcn",
        "指定的路由策略不支持发布或撤销至云联网。";
    UnsupportedOperationOfflineChargeType => UNSUPPORTEDOPERATION_OFFLINECHARGETYPE = "UnsupportedOperation.OfflineChargeType",
        "此产品计费方式已下线，请尝试其他计费方式。";
    UnsupportedOperationOnlySupportProfessionKafka => UNSUPPORTEDOPERATION_ONLYSUPPORTPROFESSIONKAFKA = "UnsupportedOperation.OnlySupportProfessionKafka",
        "仅支持专业版Ckafka。";
    UnsupportedOperationPrepaidCcnOnlySupportInterRegionLimit => UNSUPPORTEDOPERATION_PREPAIDCCNONLYSUPPORTINTERREGIONLIMIT = "UnsupportedOperation.PrepaidCcnOnlySupportInterRegionLimit",
        "预付费云联网只支持地域间限速。";
    UnsupportedOperationPrimaryIp => UNSUPPORTEDOPERATION_PRIMARYIP = "UnsupportedOperation.PrimaryIp",
        "指定的值是主IP。";
    UnsupportedOperationPublicIpAddressDisassociate => UNSUPPORTEDOPERATION_PUBLICIPADDRESSDISASSOCIATE = "UnsupportedOperation.PublicIpAddressDisassociate",
        "Nat网关至少存在一个弹性IP，弹性IP不能解绑。";
    UnsupportedOperationPublicIpAddressIsNotBGPIp => UNSUPPORTEDOPERATION_PUBLICIPADDRESSISNOTBGPIP = "UnsupportedOperation.PublicIpAddressIsNotBGPIp",
        "绑定NAT网关的弹性IP不是BGP性质的IP。";
    UnsupportedOperationPublicIpAddressIsNotExisted => UNSUPPORTEDOPERATION_PUBLICIPADDRESSISNOTEXISTED = "UnsupportedOperation.PublicIpAddressIsNotExisted",
        "绑定NAT网关的弹性IP不存在。";
    UnsupportedOperationPublicIpAddressNotBilledByTraffic => UNSUPPORTEDOPERATION_PUBLICIPADDRESSNOTBILLEDBYTRAFFIC = "UnsupportedOperation.PublicIpAddressNotBilledByTraffic",
        "绑定NAT网关的弹性IP不是按流量计费的。";
    UnsupportedOperationPurchaseLimit => UNSUPPORTEDOPERATION_PURCHASELIMIT = "UnsupportedOperation.PurchaseLimit",
        "当前账号不能在该地域使用产品。";
    UnsupportedOperationRecordExists => UNSUPPORTEDOPERATION_RECORDEXISTS = "UnsupportedOperation.RecordExists",
        "记录已存在。";
    UnsupportedOperationRecordNotExists => UNSUPPORTEDOPERATION_RECORDNOTEXISTS = "UnsupportedOperation.RecordNotExists",
        "记录不存在。";
    UnsupportedOperationResourceMismatch => UNSUPPORTEDOPERATION_RESOURCEMISMATCH = "UnsupportedOperation.ResourceMismatch",
        "输入的资源ID与IP绑定的资源不匹配，请检查。";
    UnsupportedOperationRoleNotFound => UNSUPPORTEDOPERATION_ROLENOTFOUND = "UnsupportedOperation.RoleNotFound",
        "未找到相关角色，请确认角色是否授权。";
    UnsupportedOperationRouteTableHasSubnetRule => UNSUPPORTEDOPERATION_ROUTETABLEHASSUBNETRULE = "UnsupportedOperation.RouteTableHasSubnetRule",
        "路由表绑定了子网。";
    UnsupportedOperationSpecialEndPointService => UNSUPPORTEDOPERATION_SPECIALENDPOINTSERVICE = "UnsupportedOperation.SpecialEndPointService",
        "指定的终端节点服务所创建的终端节点不支持绑定安全组。";
    UnsupportedOperationSslVpnClientIdNotFound => UNSUPPORTEDOPERATION_SSLVPNCLIENTIDNOTFOUND = "UnsupportedOperation.SslVpnClientIdNotFound",
        "SslVpnClientId 不存在。";
    UnsupportedOperationSubEniNotSupportTrunking => UNSUPPORTEDOPERATION_SUBENINOTSUPPORTTRUNKING = "UnsupportedOperation.SubEniNotSupportTrunking",
        "中继网卡不支持该操作。";
    UnsupportedOperationSystemRoute => UNSUPPORTEDOPERATION_SYSTEMROUTE = "UnsupportedOperation.SystemRoute",
        "系统路由，禁止操作。";
    UnsupportedOperationTagAllocate => UNSUPPORTEDOPERATION_TAGALLOCATE = "UnsupportedOperation.TagAllocate",
        "标签正在分配中。";
    UnsupportedOperationTagFree => UNSUPPORTEDOPERATION_TAGFREE = "UnsupportedOperation.TagFree",
        "标签正在释放中。";
    UnsupportedOperationTagNotPermit => UNSUPPORTEDOPERATION_TAGNOTPERMIT = "UnsupportedOperation.TagNotPermit",
        "标签没有权限。";
    UnsupportedOperationTagSystemReservedTagKey => UNSUPPORTEDOPERATION_TAGSYSTEMRESERVEDTAGKEY = "UnsupportedOperation.TagSystemReservedTagKey",
        "不支持使用系统预留的标签键。";
    UnsupportedOperationUinNotFound => UNSUPPORTEDOPERATION_UINNOTFOUND = "UnsupportedOperation.UinNotFound",
        "账号ID不存在。";
    UnsupportedOperationUnableCrossBorder => UNSUPPORTEDOPERATION_UNABLECROSSBORDER = "UnsupportedOperation.UnableCrossBorder",
        "不支持跨境。";
    UnsupportedOperationUnableCrossFinance => UNSUPPORTEDOPERATION_UNABLECROSSFINANCE = "UnsupportedOperation.UnableCrossFinance",
        "当前云联网无法关联金融云实例。";
    UnsupportedOperationUnassignCidrBlock => UNSUPPORTEDOPERATION_UNASSIGNCIDRBLOCK = "UnsupportedOperation.UnassignCidrBlock",
        "未分配IPv6网段。";
    UnsupportedOperationUnbindEIP => UNSUPPORTEDOPERATION_UNBINDEIP = "UnsupportedOperation.UnbindEIP",
        "未绑定EIP。";
    UnsupportedOperationUnpaidOrderAlreadyExists => UNSUPPORTEDOPERATION_UNPAIDORDERALREADYEXISTS = "UnsupportedOperation.UnpaidOrderAlreadyExists",
        "账户还有未支付订单，请先完成付款。";
    UnsupportedOperationUnsupportedBindLocalZoneEIP => UNSUPPORTEDOPERATION_UNSUPPORTEDBINDLOCALZONEEIP = "UnsupportedOperation.UnsupportedBindLocalZoneEIP",
        "不支持绑定LocalZone弹性公网IP。";
    UnsupportedOperationUnsupportedInstanceFamily => UNSUPPORTEDOPERATION_UNSUPPORTEDINSTANCEFAMILY = "UnsupportedOperation.UnsupportedInstanceFamily",
        "指定机型不支持弹性网卡。";
    UnsupportedOperationUnsupportedRegion => UNSUPPORTEDOPERATION_UNSUPPORTEDREGION = "UnsupportedOperation.UnsupportedRegion",
        "暂无法在此国家/地区提供该服务。";
    UnsupportedOperationUserAndCcnChargeTypeNotMatch => UNSUPPORTEDOPERATION_USERANDCCNCHARGETYPENOTMATCH = "UnsupportedOperation.UserAndCcnChargeTypeNotMatch",
        "当前用户付费类型不支持创建所选付费类型的云联网。";
    UnsupportedOperationVersionMismatch => UNSUPPORTEDOPERATION_VERSIONMISMATCH = "UnsupportedOperation.VersionMismatch",
        "指定安全组规则版本号和当前最新版本不一致。";
    UnsupportedOperationVpcMismatch => UNSUPPORTEDOPERATION_VPCMISMATCH = "UnsupportedOperation.VpcMismatch",
        "资源不属于同一个VPC。";
    UnsupportedOperationZoneMismatch => UNSUPPORTEDOPERATION_ZONEMISMATCH = "UnsupportedOperation.ZoneMismatch",
        "指定资源在不同的可用区。";
    VpcLimitExceeded => VPCLIMITEXCEEDED = "VpcLimitExceeded",
        "已经达到指定区域vpc资源申请数量上限。";
}
